//! Feature flag configuration.
//!
//! These values are re-read at runtime by the feature flag service, so
//! everything in this section must stay cheap to deserialize on its own.

use serde::{Deserialize, Serialize};

/// Feature flag section (`[features]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FeatureConfig {
    /// Checkout-related flags.
    #[serde(default)]
    pub checkout: CheckoutFlags,
    /// Interval for the background reload (0 = only on demand).
    #[serde(default)]
    pub refresh_interval_seconds: u64,
}

/// Checkout flags (`[features.checkout]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutFlags {
    /// Whether express checkout is offered.
    #[serde(default)]
    pub express: bool,
    /// ISO currency code used at checkout.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for CheckoutFlags {
    fn default() -> Self {
        Self {
            express: false,
            currency: default_currency(),
        }
    }
}

fn default_currency() -> String {
    "EUR".to_string()
}
