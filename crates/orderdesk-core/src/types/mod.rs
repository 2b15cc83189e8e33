//! Core type definitions used across the OrderDesk workspace.

pub mod id;

pub use id::*;
