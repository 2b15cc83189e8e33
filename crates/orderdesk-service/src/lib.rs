//! # orderdesk-service
//!
//! Business logic service layer for OrderDesk. Services orchestrate the
//! order repository and the in-process event bus to implement the order
//! workflow, and expose the runtime-refreshable feature flags.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod feature;
pub mod notification;
pub mod order;

pub use feature::FeatureFlagService;
pub use notification::OrderLoggingListener;
pub use order::OrderService;
