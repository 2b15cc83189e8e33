//! Request DTOs with validation.

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use orderdesk_core::AppError;
use orderdesk_core::error::FieldViolation;
use orderdesk_core::result::AppResult;
use orderdesk_entity::order::{CreateOrder, OrderLine, amount_violation};

/// Body of `POST /api/orders`.
///
/// Either `customerEmail` + `amount` or `sku` + `quantity`. Every field is
/// optional at the JSON level so that a missing or `null` field is reported
/// by name when the shape is resolved.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateOrderRequest {
    /// Buyer email.
    #[validate(
        custom(function = "not_blank"),
        email(message = "must be a well-formed email address")
    )]
    pub customer_email: Option<String>,
    /// Order amount, JSON number or numeric string.
    #[validate(custom(function = "storable_amount"))]
    pub amount: Option<Decimal>,
    /// Stock keeping unit.
    #[validate(custom(function = "not_blank"))]
    pub sku: Option<String>,
    /// Ordered units.
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub quantity: Option<i32>,
}

impl CreateOrderRequest {
    /// Resolve the order kind from the fields present and convert into a
    /// domain order, re-checking entity invariants.
    pub fn into_create_order(self) -> AppResult<CreateOrder> {
        let customer = self.customer_email.is_some() || self.amount.is_some();
        let stock = self.sku.is_some() || self.quantity.is_some();

        let line = match (customer, stock) {
            (true, true) => {
                let mut violations = Vec::new();
                if self.sku.is_some() {
                    violations.push(FieldViolation::new("sku", "not allowed on a customer order"));
                }
                if self.quantity.is_some() {
                    violations.push(FieldViolation::new(
                        "quantity",
                        "not allowed on a customer order",
                    ));
                }
                return Err(AppError::invalid_fields(violations));
            }
            (true, false) => match (self.customer_email, self.amount) {
                (Some(email), Some(amount)) => OrderLine::Customer {
                    customer_email: email.trim().to_string(),
                    amount,
                },
                (email, amount) => {
                    return Err(missing(&[
                        ("customerEmail", email.is_none()),
                        ("amount", amount.is_none()),
                    ]));
                }
            },
            (false, true) => match (self.sku, self.quantity) {
                (Some(sku), Some(quantity)) => OrderLine::Stock {
                    sku: sku.trim().to_string(),
                    quantity,
                },
                (sku, quantity) => {
                    return Err(missing(&[
                        ("sku", sku.is_none()),
                        ("quantity", quantity.is_none()),
                    ]));
                }
            },
            (false, false) => {
                return Err(AppError::validation(
                    "Order needs either customerEmail and amount, or sku and quantity",
                ));
            }
        };

        CreateOrder::new(line)
    }
}

fn missing(fields: &[(&str, bool)]) -> AppError {
    AppError::invalid_fields(
        fields
            .iter()
            .filter(|(_, absent)| *absent)
            .map(|(field, _)| FieldViolation::new(*field, "is required"))
            .collect(),
    )
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message(Cow::from("must not be blank")));
    }
    Ok(())
}

fn storable_amount(value: &Decimal) -> Result<(), ValidationError> {
    match amount_violation(*value) {
        Some(message) => Err(ValidationError::new("amount").with_message(Cow::from(message))),
        None => Ok(()),
    }
}
