//! Domain events emitted by OrderDesk operations.
//!
//! Events are published through the in-process [`EventBus`] after the
//! change they describe has been persisted, and consumed by registered
//! listeners such as the order logging listener.

pub mod bus;
pub mod order;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::EventId;

pub use bus::{EventBus, EventListener, PublishReport};
pub use order::OrderEvent;

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: EventId,
    /// When the event was created.
    pub timestamp: DateTime<Utc>,
    /// The event payload.
    pub payload: EventPayload,
}

/// Union of all domain event types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event", rename_all = "lowercase")]
pub enum EventPayload {
    /// An order-related event.
    Order(OrderEvent),
}

impl DomainEvent {
    /// Create a new domain event.
    pub fn new(payload: EventPayload) -> Self {
        Self {
            id: EventId::new(),
            timestamp: Utc::now(),
            payload,
        }
    }

    /// Returns the event type name, used in log fields.
    pub fn event_type(&self) -> &'static str {
        match &self.payload {
            EventPayload::Order(event) => event.event_type(),
        }
    }
}

impl From<OrderEvent> for DomainEvent {
    fn from(event: OrderEvent) -> Self {
        Self::new(EventPayload::Order(event))
    }
}
