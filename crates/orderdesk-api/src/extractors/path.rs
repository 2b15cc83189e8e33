//! Typed path parameter helpers.

use orderdesk_core::AppError;
use orderdesk_core::types::OrderId;

/// Parses an order ID from a path segment.
pub fn parse_order_id(s: &str) -> Result<OrderId, AppError> {
    s.parse()
        .map_err(|_| AppError::invalid_field("id", format!("Invalid order id: {s}")))
}
