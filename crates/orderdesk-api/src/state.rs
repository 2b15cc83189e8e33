//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use orderdesk_core::config::AppConfig;
use orderdesk_database::repositories::OrderRepository;
use orderdesk_service::{FeatureFlagService, OrderService};

/// Shared application state, cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    // Configuration
    /// Configuration loaded at startup.
    pub config: Arc<AppConfig>,

    // Repositories
    /// Order store, used directly by health checks.
    pub order_repo: Arc<dyn OrderRepository>,

    // Services
    /// Order workflow.
    pub order_service: Arc<OrderService>,
    /// Runtime-refreshable feature flags.
    pub feature_flags: Arc<FeatureFlagService>,

    /// When the state was assembled.
    pub started_at: Instant,
}

impl AppState {
    /// Assembles the state; `started_at` is set to now.
    pub fn new(
        config: Arc<AppConfig>,
        order_repo: Arc<dyn OrderRepository>,
        order_service: Arc<OrderService>,
        feature_flags: Arc<FeatureFlagService>,
    ) -> Self {
        Self {
            config,
            order_repo,
            order_service,
            feature_flags,
            started_at: Instant::now(),
        }
    }
}
