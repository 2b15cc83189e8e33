//! Route handlers organized by domain.

pub mod feature_flags;
pub mod health;
pub mod order;
