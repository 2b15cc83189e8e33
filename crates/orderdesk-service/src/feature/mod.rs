//! Runtime feature flags.

pub mod service;

pub use service::FeatureFlagService;
