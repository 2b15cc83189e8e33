//! Process-local order repository.
//!
//! Used when `database.backend = "memory"` and by tests that exercise the
//! workflow without PostgreSQL.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use orderdesk_core::result::AppResult;
use orderdesk_core::traits::Repository;
use orderdesk_core::types::OrderId;
use orderdesk_entity::order::{CreateOrder, Order};

use super::order::OrderRepository;

/// Order repository holding orders in insertion order.
#[derive(Debug, Default)]
pub struct MemoryOrderRepository {
    orders: RwLock<Vec<Order>>,
}

impl MemoryOrderRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Order, CreateOrder, OrderId> for MemoryOrderRepository {
    async fn save(&self, new: &CreateOrder) -> AppResult<Order> {
        let order = new.clone().persisted(OrderId::new(), Utc::now());
        self.orders.write().await.push(order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: &OrderId) -> AppResult<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.iter().find(|o| o.id() == *id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Order>> {
        Ok(self.orders.read().await.clone())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.orders.read().await.len() as u64)
    }
}

#[async_trait]
impl OrderRepository for MemoryOrderRepository {
    async fn mark_paid(&self, id: &OrderId) -> AppResult<Option<Order>> {
        let mut orders = self.orders.write().await;
        match orders.iter_mut().find(|o| o.id() == *id) {
            Some(order) => {
                order.mark_paid()?;
                Ok(Some(order.clone()))
            }
            None => Ok(None),
        }
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
