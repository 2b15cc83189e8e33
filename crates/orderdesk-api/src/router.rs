//! Route definitions for the OrderDesk HTTP API.
//!
//! Order and health routes are mounted under `/api`; feature flags live at
//! the root. The router receives `AppState` and passes it to all handlers
//! via Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the router with all routes, without the middleware stack.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new().merge(order_routes()).merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .merge(feature_flag_routes())
        .with_state(state)
}

/// Order creation, listing, lookup, and payment
fn order_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/orders",
            get(handlers::order::list_orders).post(handlers::order::create_order),
        )
        .route("/orders/{id}", get(handlers::order::get_order))
        .route("/orders/{id}/pay", post(handlers::order::pay_order))
}

/// Health checks
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}

/// Checkout feature flags
fn feature_flag_routes() -> Router<AppState> {
    Router::new()
        .route("/feature-flags", get(handlers::feature_flags::get_flags))
        .route(
            "/feature-flags/refresh",
            post(handlers::feature_flags::refresh_flags),
        )
}
