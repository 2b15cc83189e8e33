//! Order domain entities.

pub mod line;
pub mod model;
pub mod row;
pub mod status;

pub use line::{OrderLine, amount_violation};
pub use model::{CreateOrder, Order};
pub use row::OrderRow;
pub use status::OrderStatus;
