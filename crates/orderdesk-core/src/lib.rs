//! # orderdesk-core
//!
//! Core crate for OrderDesk. Contains the repository trait, configuration
//! schemas, typed identifiers, domain events with the in-process event bus,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other OrderDesk crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
