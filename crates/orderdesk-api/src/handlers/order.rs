//! Order handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::dto::request::CreateOrderRequest;
use crate::dto::response::OrderResponse;
use crate::error::ApiResult;
use crate::extractors::{ValidatedJson, parse_order_id};
use crate::state::AppState;

/// POST /api/orders
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateOrderRequest>,
) -> ApiResult<(StatusCode, Json<OrderResponse>)> {
    let new = req.into_create_order()?;
    let order = state.order_service.create_order(new).await?;
    Ok((StatusCode::CREATED, Json(OrderResponse::from(&order))))
}

/// GET /api/orders
pub async fn list_orders(State(state): State<AppState>) -> ApiResult<Json<Vec<OrderResponse>>> {
    let orders = state.order_service.list_orders().await?;
    Ok(Json(orders.iter().map(OrderResponse::from).collect()))
}

/// GET /api/orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<OrderResponse>> {
    let order = state.order_service.get_order(parse_order_id(&id)?).await?;
    Ok(Json(OrderResponse::from(&order)))
}

/// POST /api/orders/{id}/pay
pub async fn pay_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<OrderResponse>> {
    let order = state.order_service.mark_paid(parse_order_id(&id)?).await?;
    Ok(Json(OrderResponse::from(&order)))
}
