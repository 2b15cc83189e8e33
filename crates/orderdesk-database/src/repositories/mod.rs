//! Repository implementations for OrderDesk entities.

pub mod memory;
pub mod order;

pub use memory::MemoryOrderRepository;
pub use order::{OrderRepository, PgOrderRepository};
