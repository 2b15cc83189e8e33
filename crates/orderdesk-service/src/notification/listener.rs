//! Structured logging of order lifecycle events.

use async_trait::async_trait;
use tracing::info;

use orderdesk_core::events::{DomainEvent, EventListener, EventPayload, OrderEvent};
use orderdesk_core::result::AppResult;

/// Writes one `info` entry per order event. Never fails.
#[derive(Debug, Default, Clone)]
pub struct OrderLoggingListener;

impl OrderLoggingListener {
    /// Creates the listener.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventListener for OrderLoggingListener {
    async fn handle(&self, event: &DomainEvent) -> AppResult<()> {
        let EventPayload::Order(order_event) = &event.payload;

        match order_event {
            OrderEvent::Created { order_id, .. } => {
                info!(
                    event_id = %event.id,
                    order_id = %order_id,
                    reference = order_event.reference().unwrap_or_default(),
                    "Order created notification"
                );
            }
            OrderEvent::Paid { order_id, paid_at } => {
                info!(
                    event_id = %event.id,
                    order_id = %order_id,
                    paid_at = %paid_at,
                    "Order paid notification"
                );
            }
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "order-logging"
    }
}
