//! Shared helpers for API tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use orderdesk_api::{AppState, build_app};
use orderdesk_core::config::{AppConfig, ConfigSource};
use orderdesk_core::events::{EventBus, EventListener};
use orderdesk_database::MemoryOrderRepository;
use orderdesk_service::{FeatureFlagService, OrderLoggingListener, OrderService};

/// Test application backed by the in-memory order store.
pub struct TestApp {
    /// The Axum app, middleware included.
    pub router: Router,
    /// Direct access to stored orders.
    pub repo: Arc<MemoryOrderRepository>,
    /// Configuration directory; removed on drop.
    pub config_dir: TempDir,
}

impl TestApp {
    /// App with an empty configuration directory (all defaults).
    pub async fn new() -> Self {
        Self::with_config("").await
    }

    /// App whose `default.toml` holds `contents`.
    pub async fn with_config(contents: &str) -> Self {
        Self::build(contents, Vec::new()).await
    }

    /// Default app with `listener` registered after the logging listener.
    pub async fn with_listener(listener: Arc<dyn EventListener>) -> Self {
        Self::build("", vec![listener]).await
    }

    async fn build(contents: &str, extra_listeners: Vec<Arc<dyn EventListener>>) -> Self {
        let config_dir = tempfile::tempdir().expect("Failed to create config dir");
        std::fs::write(config_dir.path().join("default.toml"), contents)
            .expect("Failed to write config");

        let source = ConfigSource::new(config_dir.path(), "test");
        let config: AppConfig = source.load().expect("Failed to load test config");

        let repo = Arc::new(MemoryOrderRepository::new());
        let bus = Arc::new(EventBus::from_config(&config.events));
        bus.register(Arc::new(OrderLoggingListener::new())).await;
        for listener in extra_listeners {
            bus.register(listener).await;
        }

        let order_service = Arc::new(OrderService::new(repo.clone(), bus));
        let feature_flags = Arc::new(FeatureFlagService::new(config.features.clone(), source));

        let state = AppState::new(Arc::new(config), repo.clone(), order_service, feature_flags);

        Self {
            router: build_app(state),
            repo,
            config_dir,
        }
    }

    /// Replace `default.toml` in the configuration directory.
    pub fn rewrite_config(&self, contents: &str) {
        std::fs::write(self.config_dir.path().join("default.toml"), contents)
            .expect("Failed to rewrite config");
    }

    /// Make an HTTP request to the test app.
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body.
    pub body: Value,
}
