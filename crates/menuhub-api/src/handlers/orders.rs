//! Order handlers.

use axum::Json;
use axum::extract::State;

use menuhub_core::error::AppError;

use crate::dto::request::StatusUpdateRequest;
use crate::dto::response::{OrderResponse, OrderStatusResponse, OrdersResponse};
use crate::extractors::{AuthUser, IdPath, JsonBody};
use crate::state::AppState;

/// GET /admin/get-orders
pub async fn list_orders(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<OrdersResponse>, AppError> {
    let orders = state.order_service.list().await?;
    Ok(Json(OrdersResponse {
        message: "All orders fetched successfully".to_string(),
        orders,
    }))
}

/// GET /admin/orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> Result<Json<OrderResponse>, AppError> {
    let details = state.order_service.get(id).await?;
    Ok(Json(details.into()))
}

/// PATCH /admin/order-status/{id}
pub async fn update_order_status(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
    JsonBody(req): JsonBody<StatusUpdateRequest>,
) -> Result<Json<OrderStatusResponse>, AppError> {
    let order = state
        .order_service
        .update_status(id, req.status.as_deref())
        .await?;
    Ok(Json(OrderStatusResponse {
        message: "Status updated".to_string(),
        order,
    }))
}
