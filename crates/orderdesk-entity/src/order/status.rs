//! Order status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use orderdesk_core::AppError;

/// Lifecycle status of an order. Transitions only go CREATED → PAID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    /// Persisted, awaiting payment.
    #[default]
    Created,
    /// Payment recorded. Terminal.
    Paid,
}

impl OrderStatus {
    /// Whether an order in this status may be marked paid.
    pub fn can_mark_paid(&self) -> bool {
        matches!(self, Self::Created)
    }

    /// Return the status as stored in the `orders.status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Paid => "PAID",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATED" => Ok(Self::Created),
            "PAID" => Ok(Self::Paid),
            _ => Err(AppError::validation(format!(
                "Invalid order status: '{s}'. Expected one of: CREATED, PAID"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_stored_form() {
        for status in [OrderStatus::Created, OrderStatus::Paid] {
            assert_eq!(status.as_str().parse::<OrderStatus>().expect("parse"), status);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("paid".parse::<OrderStatus>().is_err());
        assert!("SHIPPED".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_only_created_can_be_paid() {
        assert!(OrderStatus::Created.can_mark_paid());
        assert!(!OrderStatus::Paid.can_mark_paid());
    }

    #[test]
    fn test_serializes_uppercase() {
        let json = serde_json::to_string(&OrderStatus::Created).expect("serialize");
        assert_eq!(json, "\"CREATED\"");
    }
}
