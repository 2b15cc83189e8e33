//! Order-related domain events.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::OrderId;

/// Events related to the order lifecycle.
///
/// Payloads are flattened snapshots taken after persistence, so listeners
/// never observe an order without its storage-assigned identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OrderEvent {
    /// An order was persisted.
    Created {
        /// The persisted order ID.
        order_id: OrderId,
        /// Customer email (customer orders).
        #[serde(skip_serializing_if = "Option::is_none")]
        customer_email: Option<String>,
        /// Order amount (customer orders).
        #[serde(skip_serializing_if = "Option::is_none")]
        amount: Option<Decimal>,
        /// Stock keeping unit (stock orders).
        #[serde(skip_serializing_if = "Option::is_none")]
        sku: Option<String>,
        /// Ordered quantity (stock orders).
        #[serde(skip_serializing_if = "Option::is_none")]
        quantity: Option<i32>,
        /// Storage-assigned creation time.
        created_at: DateTime<Utc>,
    },
    /// An order moved from CREATED to PAID.
    Paid {
        /// The order ID.
        order_id: OrderId,
        /// When the payment was recorded.
        paid_at: DateTime<Utc>,
    },
}

impl OrderEvent {
    /// Returns the order this event is about.
    pub fn order_id(&self) -> OrderId {
        match self {
            Self::Created { order_id, .. } | Self::Paid { order_id, .. } => *order_id,
        }
    }

    /// Returns the identifying business field of a created order
    /// (customer email or SKU).
    pub fn reference(&self) -> Option<&str> {
        match self {
            Self::Created {
                customer_email,
                sku,
                ..
            } => customer_email.as_deref().or(sku.as_deref()),
            Self::Paid { .. } => None,
        }
    }

    /// Returns the event type name.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Created { .. } => "order.created",
            Self::Paid { .. } => "order.paid",
        }
    }
}
