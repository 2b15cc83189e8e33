//! In-process event bus. Listeners register with a priority and are
//! invoked sequentially, in order, for every published event.
//!
//! Publication never fails from the publisher's point of view: a listener
//! that errors or exceeds the timeout is logged and counted in the
//! [`PublishReport`], and the remaining listeners still run. One
//! publication never outlasts its budget; listeners that would start
//! after the budget is spent are skipped and reported as failed.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::config::EventsConfig;
use crate::result::AppResult;

use super::DomainEvent;

/// Priority given to listeners that do not override [`EventListener::priority`].
pub const DEFAULT_PRIORITY: i32 = 100;

/// Trait for event listener implementations.
#[async_trait]
pub trait EventListener: Send + Sync + std::fmt::Debug {
    /// Handles a published event.
    async fn handle(&self, event: &DomainEvent) -> AppResult<()>;

    /// Returns the listener name used in logs.
    fn name(&self) -> &str;

    /// Returns the priority (lower = runs first).
    fn priority(&self) -> i32 {
        DEFAULT_PRIORITY
    }
}

/// Outcome of publishing one event to all listeners.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReport {
    /// Listeners that completed successfully.
    pub delivered: usize,
    /// Names of listeners that returned an error or timed out.
    pub failed: Vec<String>,
}

impl PublishReport {
    /// Whether every listener handled the event.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Registry and dispatcher for domain event listeners.
#[derive(Debug)]
pub struct EventBus {
    /// Listeners sorted by priority; equal priorities keep registration order.
    listeners: RwLock<Vec<Arc<dyn EventListener>>>,
    /// Per-listener time limit.
    listener_timeout: Duration,
    /// Time limit for one publication across all listeners.
    publish_budget: Duration,
}

impl EventBus {
    /// Creates an empty bus with a per-listener timeout and a total budget.
    pub fn new(listener_timeout: Duration, publish_budget: Duration) -> Self {
        Self {
            listeners: RwLock::new(Vec::new()),
            listener_timeout,
            publish_budget,
        }
    }

    /// Creates an empty bus from the `[events]` configuration section.
    pub fn from_config(config: &EventsConfig) -> Self {
        Self::new(
            Duration::from_secs(config.listener_timeout_seconds),
            Duration::from_secs(config.publish_budget_seconds),
        )
    }

    /// Registers a listener.
    pub async fn register(&self, listener: Arc<dyn EventListener>) {
        let name = listener.name().to_string();
        let priority = listener.priority();

        let mut listeners = self.listeners.write().await;
        listeners.push(listener);
        // Stable sort keeps registration order within a priority.
        listeners.sort_by_key(|l| l.priority());

        info!(listener = %name, priority = priority, "Event listener registered");
    }

    /// Returns the number of registered listeners.
    pub async fn listener_count(&self) -> usize {
        self.listeners.read().await.len()
    }

    /// Publishes an event to every listener and waits for all of them.
    pub async fn publish(&self, event: &DomainEvent) -> PublishReport {
        // Snapshot so a slow listener does not hold the lock.
        let listeners: Vec<Arc<dyn EventListener>> = self.listeners.read().await.clone();
        let mut report = PublishReport::default();

        debug!(
            event_id = %event.id,
            event_type = event.event_type(),
            listener_count = listeners.len(),
            "Publishing event"
        );

        let deadline = Instant::now() + self.publish_budget;

        for listener in &listeners {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                warn!(
                    event_id = %event.id,
                    event_type = event.event_type(),
                    listener = %listener.name(),
                    budget_ms = self.publish_budget.as_millis() as u64,
                    "Publish budget exhausted, listener skipped"
                );
                report.failed.push(listener.name().to_string());
                continue;
            }

            let limit = self.listener_timeout.min(remaining);
            match tokio::time::timeout(limit, listener.handle(event)).await {
                Ok(Ok(())) => report.delivered += 1,
                Ok(Err(e)) => {
                    warn!(
                        event_id = %event.id,
                        event_type = event.event_type(),
                        listener = %listener.name(),
                        error = %e,
                        "Event listener failed"
                    );
                    report.failed.push(listener.name().to_string());
                }
                Err(_) => {
                    error!(
                        event_id = %event.id,
                        event_type = event.event_type(),
                        listener = %listener.name(),
                        timeout_ms = limit.as_millis() as u64,
                        "Event listener timed out"
                    );
                    report.failed.push(listener.name().to_string());
                }
            }
        }

        report
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::from_config(&EventsConfig::default())
    }
}
