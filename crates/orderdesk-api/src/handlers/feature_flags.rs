//! Feature flag handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::FeatureFlagsResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /feature-flags
pub async fn get_flags(State(state): State<AppState>) -> Json<FeatureFlagsResponse> {
    Json(state.feature_flags.current().await.into())
}

/// POST /feature-flags/refresh
pub async fn refresh_flags(State(state): State<AppState>) -> ApiResult<Json<FeatureFlagsResponse>> {
    let flags = state.feature_flags.refresh().await?;
    Ok(Json(flags.into()))
}
