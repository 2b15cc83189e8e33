//! Row mapping for the `orders` table.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use orderdesk_core::AppError;
use orderdesk_core::types::OrderId;

use super::line::OrderLine;
use super::model::Order;
use super::status::OrderStatus;

/// Raw `orders` row as returned by `SELECT *`.
#[derive(Debug, Clone, FromRow)]
pub struct OrderRow {
    /// Primary key.
    pub id: Uuid,
    /// Customer email (customer orders).
    pub customer_email: Option<String>,
    /// Amount (customer orders).
    pub amount: Option<Decimal>,
    /// SKU (stock orders).
    pub sku: Option<String>,
    /// Quantity (stock orders).
    pub quantity: Option<i32>,
    /// Stored status string.
    pub status: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = AppError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let status: OrderStatus = row.status.parse().map_err(|_| {
            AppError::data_integrity(format!(
                "Order {} has unknown status '{}'",
                row.id, row.status
            ))
        })?;

        let line = match (row.customer_email, row.amount, row.sku, row.quantity) {
            (Some(customer_email), Some(amount), None, None) => OrderLine::Customer {
                customer_email,
                amount,
            },
            (None, None, Some(sku), Some(quantity)) => OrderLine::Stock { sku, quantity },
            _ => {
                return Err(AppError::data_integrity(format!(
                    "Order {} does not match any order shape",
                    row.id
                )));
            }
        };

        Ok(Order::from_parts(
            OrderId::from_uuid(row.id),
            line,
            status,
            row.created_at,
        ))
    }
}
