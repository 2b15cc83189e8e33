//! Core traits defined in `orderdesk-core` and implemented by other crates.

pub mod repository;

pub use repository::Repository;
