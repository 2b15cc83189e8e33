//! Order creation, listing, and payment.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use orderdesk_core::events::{DomainEvent, EventBus};
use orderdesk_core::result::AppResult;
use orderdesk_core::traits::Repository;
use orderdesk_core::types::OrderId;
use orderdesk_core::AppError;
use orderdesk_database::repositories::OrderRepository;
use orderdesk_entity::order::{CreateOrder, Order};

/// Runs the order workflow: persist first, then notify listeners.
#[derive(Debug, Clone)]
pub struct OrderService {
    /// Order storage.
    order_repo: Arc<dyn OrderRepository>,
    /// In-process event bus.
    event_bus: Arc<EventBus>,
}

impl OrderService {
    /// Creates a new order service.
    pub fn new(order_repo: Arc<dyn OrderRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            order_repo,
            event_bus,
        }
    }

    /// Persists a validated order and publishes `order.created`.
    ///
    /// Nothing is published when persistence fails. Listener failures are
    /// logged by the bus and do not affect the returned order.
    pub async fn create_order(&self, new: CreateOrder) -> AppResult<Order> {
        let order = self.order_repo.save(&new).await?;

        info!(
            order_id = %order.id(),
            reference = order.line().reference(),
            "Order created"
        );

        self.publish(order.created_event().into()).await;
        Ok(order)
    }

    /// Lists all orders in insertion order.
    pub async fn list_orders(&self) -> AppResult<Vec<Order>> {
        self.order_repo.find_all().await
    }

    /// Gets an order by ID.
    pub async fn get_order(&self, id: OrderId) -> AppResult<Order> {
        self.order_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))
    }

    /// Marks an order as paid and publishes `order.paid`.
    pub async fn mark_paid(&self, id: OrderId) -> AppResult<Order> {
        let order = self
            .order_repo
            .mark_paid(&id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))?;

        info!(order_id = %order.id(), "Order paid");

        self.publish(order.paid_event(Utc::now()).into()).await;
        Ok(order)
    }

    async fn publish(&self, event: DomainEvent) {
        let report = self.event_bus.publish(&event).await;
        if !report.is_clean() {
            warn!(
                event_id = %event.id,
                event_type = event.event_type(),
                failed = ?report.failed,
                "Some listeners did not handle the event"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    use super::*;
    use orderdesk_core::error::ErrorKind;
    use orderdesk_core::events::{EventListener, EventPayload, OrderEvent};
    use orderdesk_database::MemoryOrderRepository;
    use orderdesk_entity::order::OrderStatus;

    /// Records every event it sees, and how many orders were stored at that
    /// moment.
    #[derive(Debug)]
    struct Recorder {
        repo: Arc<MemoryOrderRepository>,
        seen: Mutex<Vec<(OrderEvent, u64)>>,
    }

    #[async_trait]
    impl EventListener for Recorder {
        async fn handle(&self, event: &DomainEvent) -> AppResult<()> {
            let stored = self.repo.count().await?;
            let EventPayload::Order(order_event) = &event.payload;
            self.seen
                .lock()
                .expect("lock")
                .push((order_event.clone(), stored));
            Ok(())
        }

        fn name(&self) -> &str {
            "recorder"
        }
    }

    #[derive(Debug)]
    struct Broken;

    #[async_trait]
    impl EventListener for Broken {
        async fn handle(&self, _event: &DomainEvent) -> AppResult<()> {
            Err(AppError::internal("mail relay down"))
        }

        fn name(&self) -> &str {
            "broken"
        }

        fn priority(&self) -> i32 {
            0
        }
    }

    #[derive(Debug)]
    struct UnreachableStore;

    #[async_trait]
    impl Repository<Order, CreateOrder, OrderId> for UnreachableStore {
        async fn save(&self, _new: &CreateOrder) -> AppResult<Order> {
            Err(AppError::database("connection refused"))
        }

        async fn find_by_id(&self, _id: &OrderId) -> AppResult<Option<Order>> {
            Err(AppError::database("connection refused"))
        }

        async fn find_all(&self) -> AppResult<Vec<Order>> {
            Err(AppError::database("connection refused"))
        }

        async fn count(&self) -> AppResult<u64> {
            Err(AppError::database("connection refused"))
        }
    }

    #[async_trait]
    impl OrderRepository for UnreachableStore {
        async fn mark_paid(&self, _id: &OrderId) -> AppResult<Option<Order>> {
            Err(AppError::database("connection refused"))
        }

        async fn health_check(&self) -> AppResult<bool> {
            Ok(false)
        }
    }

    async fn setup() -> (OrderService, Arc<MemoryOrderRepository>, Arc<Recorder>) {
        let repo = Arc::new(MemoryOrderRepository::new());
        let recorder = Arc::new(Recorder {
            repo: Arc::clone(&repo),
            seen: Mutex::new(Vec::new()),
        });
        let bus = Arc::new(EventBus::default());
        bus.register(recorder.clone()).await;

        let service = OrderService::new(repo.clone(), bus);
        (service, repo, recorder)
    }

    #[tokio::test]
    async fn test_create_order_persists_before_publishing() {
        let (service, _repo, recorder) = setup().await;
        let before = Utc::now();

        let order = service
            .create_order(CreateOrder::customer("checkout@enouveau.io", dec!(42.90)).expect("valid"))
            .await
            .expect("create");

        assert_eq!(order.status(), OrderStatus::Created);
        assert!(order.created_at() >= before);

        let seen = recorder.seen.lock().expect("lock");
        assert_eq!(seen.len(), 1);
        let (event, stored) = &seen[0];
        assert_eq!(*stored, 1);
        assert_eq!(event.order_id(), order.id());
        assert_eq!(event.reference(), Some("checkout@enouveau.io"));
    }

    #[tokio::test]
    async fn test_storage_failure_publishes_nothing() {
        let recorder = Arc::new(Recorder {
            repo: Arc::new(MemoryOrderRepository::new()),
            seen: Mutex::new(Vec::new()),
        });
        let bus = Arc::new(EventBus::default());
        bus.register(recorder.clone()).await;
        let service = OrderService::new(Arc::new(UnreachableStore), bus);

        let err = service
            .create_order(CreateOrder::stock("SKU-1", 2).expect("valid"))
            .await
            .expect_err("storage down");

        assert_eq!(err.kind, ErrorKind::Database);
        assert!(recorder.seen.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn test_failing_listener_does_not_fail_creation() {
        let (service, repo, recorder) = setup().await;
        service.event_bus.register(Arc::new(Broken)).await;

        let order = service
            .create_order(CreateOrder::stock("SKU-1", 3).expect("valid"))
            .await
            .expect("creation succeeds");

        assert_eq!(repo.find_all().await.expect("list"), vec![order]);
        assert_eq!(recorder.seen.lock().expect("lock").len(), 1);
    }

    #[tokio::test]
    async fn test_mark_paid_publishes_and_rejects_second_payment() {
        let (service, _repo, recorder) = setup().await;
        let order = service
            .create_order(CreateOrder::stock("SKU-1", 1).expect("valid"))
            .await
            .expect("create");

        let paid = service.mark_paid(order.id()).await.expect("pay");
        assert_eq!(paid.status(), OrderStatus::Paid);

        let err = service.mark_paid(order.id()).await.expect_err("second pay");
        assert_eq!(err.kind, ErrorKind::Conflict);

        let seen = recorder.seen.lock().expect("lock");
        let types: Vec<_> = seen.iter().map(|(e, _)| e.event_type()).collect();
        assert_eq!(types, vec!["order.created", "order.paid"]);
    }

    #[tokio::test]
    async fn test_unknown_order_is_not_found() {
        let (service, _repo, recorder) = setup().await;

        let err = service.get_order(OrderId::new()).await.expect_err("missing");
        assert_eq!(err.kind, ErrorKind::NotFound);

        let err = service.mark_paid(OrderId::new()).await.expect_err("missing");
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(recorder.seen.lock().expect("lock").is_empty());
    }
}
