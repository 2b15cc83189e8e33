//! Custom Axum extractors.

pub mod path;
pub mod validated_json;

pub use path::parse_order_id;
pub use validated_json::{ValidatedJson, field_violations};
