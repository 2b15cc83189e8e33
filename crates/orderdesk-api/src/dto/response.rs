//! Response DTOs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use orderdesk_core::config::FeatureConfig;
use orderdesk_core::types::OrderId;
use orderdesk_entity::order::{Order, OrderStatus};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Order projection returned by the order endpoints.
///
/// Fields of the other order kind are omitted rather than sent as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    /// Order ID.
    pub id: OrderId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    /// Serialized as a JSON number.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    /// `CREATED` or `PAID`.
    pub status: OrderStatus,
    /// Storage-assigned creation time.
    pub created_at: DateTime<Utc>,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        let line = order.line();
        Self {
            id: order.id(),
            customer_email: line.customer_email().map(str::to_string),
            amount: line.amount(),
            sku: line.sku().map(str::to_string),
            quantity: line.quantity(),
            status: order.status(),
            created_at: order.created_at(),
        }
    }
}

/// Checkout flags exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlagsResponse {
    /// One-click checkout enabled.
    pub express_checkout: bool,
    /// ISO currency code used at checkout.
    pub currency: String,
}

impl From<FeatureConfig> for FeatureFlagsResponse {
    fn from(features: FeatureConfig) -> Self {
        Self {
            express_checkout: features.checkout.express,
            currency: features.checkout.currency,
        }
    }
}

/// Basic liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Seconds since the router was built.
    pub uptime_seconds: u64,
}

/// Liveness plus a storage round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Configured storage backend.
    pub backend: String,
    /// `connected` or `unreachable`.
    pub database: String,
    /// Stored order count, when the store answered.
    pub orders: Option<u64>,
}
