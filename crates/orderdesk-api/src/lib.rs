//! # orderdesk-api
//!
//! HTTP API layer for OrderDesk built on Axum.
//!
//! Provides the order and feature-flag endpoints, health checks, middleware
//! (CORS, request logging, timeouts), the validating JSON extractor, DTOs,
//! and the mapping from `AppError` to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
