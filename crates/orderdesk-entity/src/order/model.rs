//! Order entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use orderdesk_core::events::OrderEvent;
use orderdesk_core::types::OrderId;
use orderdesk_core::{AppError, AppResult};

use super::line::OrderLine;
use super::status::OrderStatus;

/// A persisted order.
///
/// Fields are private: identity and `created_at` come from storage and never
/// change, and the status can only be advanced through [`Order::mark_paid`].
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: OrderId,
    line: OrderLine,
    status: OrderStatus,
    created_at: DateTime<Utc>,
}

impl Order {
    pub(crate) fn from_parts(
        id: OrderId,
        line: OrderLine,
        status: OrderStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            line,
            status,
            created_at,
        }
    }

    /// Storage-assigned identity.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// The ordered line.
    pub fn line(&self) -> &OrderLine {
        &self.line
    }

    /// Current status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Storage-assigned creation time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Advance the order from CREATED to PAID.
    ///
    /// Paying an already paid order is a conflict; there is no way back to
    /// CREATED.
    pub fn mark_paid(&mut self) -> AppResult<()> {
        if !self.status.can_mark_paid() {
            return Err(AppError::conflict(format!(
                "Order {} is already {}",
                self.id, self.status
            )));
        }
        self.status = OrderStatus::Paid;
        Ok(())
    }

    /// Snapshot published after the order has been persisted.
    pub fn created_event(&self) -> OrderEvent {
        OrderEvent::Created {
            order_id: self.id,
            customer_email: self.line.customer_email().map(str::to_string),
            amount: self.line.amount(),
            sku: self.line.sku().map(str::to_string),
            quantity: self.line.quantity(),
            created_at: self.created_at,
        }
    }

    /// Event published after the PAID status has been persisted.
    pub fn paid_event(&self, paid_at: DateTime<Utc>) -> OrderEvent {
        OrderEvent::Paid {
            order_id: self.id,
            paid_at,
        }
    }
}

/// A validated order that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrder {
    line: OrderLine,
}

impl CreateOrder {
    /// Validate a line and wrap it for persistence.
    pub fn new(line: OrderLine) -> AppResult<Self> {
        line.validate()?;
        Ok(Self { line })
    }

    /// A customer order for `amount`.
    pub fn customer(customer_email: impl Into<String>, amount: Decimal) -> AppResult<Self> {
        Self::new(OrderLine::Customer {
            customer_email: customer_email.into(),
            amount,
        })
    }

    /// A stock order for `quantity` units of `sku`.
    pub fn stock(sku: impl Into<String>, quantity: i32) -> AppResult<Self> {
        Self::new(OrderLine::Stock {
            sku: sku.into(),
            quantity,
        })
    }

    /// The validated line.
    pub fn line(&self) -> &OrderLine {
        &self.line
    }

    /// Status every new order starts in.
    pub fn initial_status(&self) -> OrderStatus {
        OrderStatus::Created
    }

    /// Materialize the order once storage has assigned its identity and
    /// creation time. Intended for repository implementations.
    pub fn persisted(self, id: OrderId, created_at: DateTime<Utc>) -> Order {
        let status = self.initial_status();
        Order::from_parts(id, self.line, status, created_at)
    }
}
