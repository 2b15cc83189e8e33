//! Event listeners reacting to order lifecycle events.

pub mod listener;

pub use listener::OrderLoggingListener;
