//! Order repository trait and its PostgreSQL implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use orderdesk_core::error::{AppError, ErrorKind};
use orderdesk_core::result::AppResult;
use orderdesk_core::traits::Repository;
use orderdesk_core::types::OrderId;
use orderdesk_entity::order::{CreateOrder, Order, OrderRow, OrderStatus};

/// Storage contract consumed by the order workflow.
#[async_trait]
pub trait OrderRepository: Repository<Order, CreateOrder, OrderId> + std::fmt::Debug {
    /// Move an order from CREATED to PAID.
    ///
    /// Returns `None` when the order does not exist and a `Conflict` error
    /// when it is already paid.
    async fn mark_paid(&self, id: &OrderId) -> AppResult<Option<Order>>;

    /// Check that the backing store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

/// Order repository backed by the `orders` table.
#[derive(Debug, Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    /// Create a new order repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_error(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Database, format!("{message}: {e}"), e)
}

#[async_trait]
impl Repository<Order, CreateOrder, OrderId> for PgOrderRepository {
    async fn save(&self, new: &CreateOrder) -> AppResult<Order> {
        let line = new.line();

        let row = sqlx::query_as::<_, OrderRow>(
            "INSERT INTO orders (customer_email, amount, sku, quantity, status) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(line.customer_email())
        .bind(line.amount())
        .bind(line.sku())
        .bind(line.quantity())
        .bind(new.initial_status().as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create order"))?;

        Order::try_from(row)
    }

    async fn find_by_id(&self, id: &OrderId) -> AppResult<Option<Order>> {
        sqlx::query_as::<_, OrderRow>("SELECT * FROM orders WHERE id = $1")
            .bind(id.into_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find order"))?
            .map(Order::try_from)
            .transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<Order>> {
        sqlx::query_as::<_, OrderRow>("SELECT * FROM orders ORDER BY created_at ASC, id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list orders"))?
            .into_iter()
            .map(Order::try_from)
            .collect()
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count orders"))?;
        Ok(total as u64)
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn mark_paid(&self, id: &OrderId) -> AppResult<Option<Order>> {
        let updated = sqlx::query_as::<_, OrderRow>(
            "UPDATE orders SET status = $2 WHERE id = $1 AND status = $3 RETURNING *",
        )
        .bind(id.into_uuid())
        .bind(OrderStatus::Paid.as_str())
        .bind(OrderStatus::Created.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to mark order as paid"))?;

        match updated {
            Some(row) => Order::try_from(row).map(Some),
            // Either missing or no longer CREATED; tell the two apart.
            None => match self.find_by_id(id).await? {
                Some(existing) => Err(AppError::conflict(format!(
                    "Order {} is already {}",
                    id,
                    existing.status()
                ))),
                None => Ok(None),
            },
        }
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(db_error("Health check failed"))
    }
}
