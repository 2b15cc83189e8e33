//! Health check handlers.

use axum::Json;
use axum::extract::State;
use tracing::warn;

use orderdesk_core::traits::Repository;

use crate::dto::response::{ApiResponse, DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    }))
}

/// GET /api/health/detailed
pub async fn health_detailed(
    State(state): State<AppState>,
) -> Json<ApiResponse<DetailedHealthResponse>> {
    let reachable = match state.order_repo.health_check().await {
        Ok(ok) => ok,
        Err(e) => {
            warn!(error = %e, "Storage health check failed");
            false
        }
    };

    let orders = if reachable {
        state.order_repo.count().await.ok()
    } else {
        None
    };

    Json(ApiResponse::ok(DetailedHealthResponse {
        status: if reachable { "ok" } else { "degraded" }.to_string(),
        backend: state.config.database.backend.as_str().to_string(),
        database: if reachable { "connected" } else { "unreachable" }.to_string(),
        orders,
    }))
}
