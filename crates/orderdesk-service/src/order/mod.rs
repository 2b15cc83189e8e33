//! Order workflow services.

pub mod service;

pub use service::OrderService;
