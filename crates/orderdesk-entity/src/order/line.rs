//! The business fields of an order.

use rust_decimal::Decimal;

use orderdesk_core::error::FieldViolation;
use orderdesk_core::{AppError, AppResult};

/// Decimal places stored for an amount (`NUMERIC(19, 2)`).
const AMOUNT_SCALE: u32 = 2;

/// Largest integer-part magnitude the amount column can hold, exclusive.
const AMOUNT_LIMIT: i64 = 100_000_000_000_000_000;

/// Check an amount against what the `orders.amount` column stores exactly.
///
/// Returns the violation message, if any. Trailing zeros do not count
/// towards the scale, so `42.900` is accepted as `42.90`.
pub fn amount_violation(amount: Decimal) -> Option<&'static str> {
    if amount <= Decimal::ZERO {
        Some("must be greater than 0")
    } else if amount.normalize().scale() > AMOUNT_SCALE {
        Some("must have at most 2 decimal places")
    } else if amount >= Decimal::from(AMOUNT_LIMIT) {
        Some("must be less than 100000000000000000")
    } else {
        None
    }
}

/// What was ordered. An order is either a customer charge or a stock
/// request; both share the same lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderLine {
    /// A charge against a customer.
    Customer {
        /// Customer email. Must not be blank.
        customer_email: String,
        /// Charged amount. Must be greater than zero.
        amount: Decimal,
    },
    /// A stock request for a single SKU.
    Stock {
        /// Stock keeping unit. Must not be blank.
        sku: String,
        /// Requested quantity. Must be at least 1.
        quantity: i32,
    },
}

impl OrderLine {
    /// Check the line invariants, reporting every failing field.
    pub fn validate(&self) -> AppResult<()> {
        let mut violations = Vec::new();

        match self {
            Self::Customer {
                customer_email,
                amount,
            } => {
                if customer_email.trim().is_empty() {
                    violations.push(FieldViolation::new("customerEmail", "must not be blank"));
                }
                if let Some(message) = amount_violation(*amount) {
                    violations.push(FieldViolation::new("amount", message));
                }
            }
            Self::Stock { sku, quantity } => {
                if sku.trim().is_empty() {
                    violations.push(FieldViolation::new("sku", "must not be blank"));
                }
                if *quantity < 1 {
                    violations.push(FieldViolation::new("quantity", "must be at least 1"));
                }
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::invalid_fields(violations))
        }
    }

    /// The identifying field: customer email or SKU.
    pub fn reference(&self) -> &str {
        match self {
            Self::Customer { customer_email, .. } => customer_email,
            Self::Stock { sku, .. } => sku,
        }
    }

    /// Customer email, for customer orders.
    pub fn customer_email(&self) -> Option<&str> {
        match self {
            Self::Customer { customer_email, .. } => Some(customer_email),
            Self::Stock { .. } => None,
        }
    }

    /// Amount, for customer orders.
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            Self::Customer { amount, .. } => Some(*amount),
            Self::Stock { .. } => None,
        }
    }

    /// SKU, for stock orders.
    pub fn sku(&self) -> Option<&str> {
        match self {
            Self::Stock { sku, .. } => Some(sku),
            Self::Customer { .. } => None,
        }
    }

    /// Quantity, for stock orders.
    pub fn quantity(&self) -> Option<i32> {
        match self {
            Self::Stock { quantity, .. } => Some(*quantity),
            Self::Customer { .. } => None,
        }
    }
}
