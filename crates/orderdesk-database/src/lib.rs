//! # orderdesk-database
//!
//! PostgreSQL connection management, embedded migrations, and the order
//! repository implementations (Postgres and in-memory).

pub mod connection;
pub mod migration;
pub mod repositories;

pub use repositories::{MemoryOrderRepository, OrderRepository, PgOrderRepository};
