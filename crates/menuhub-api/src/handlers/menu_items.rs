//! Menu item handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use menuhub_core::error::AppError;
use menuhub_service::catalog::MenuItemRequest;

use crate::dto::response::{MenuItemResponse, MenuItemsResponse, MessageResponse};
use crate::extractors::{AuthUser, IdPath, JsonBody};
use crate::state::AppState;

/// GET /admin/get-menu-items
pub async fn list_menu_items(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<MenuItemsResponse>, AppError> {
    let data = state.menu_item_service.list().await?;
    Ok(Json(MenuItemsResponse {
        message: "Menu items fetched successfully".to_string(),
        data,
    }))
}

/// POST /admin/menu-items/create
pub async fn create_menu_item(
    State(state): State<AppState>,
    _auth: AuthUser,
    JsonBody(req): JsonBody<MenuItemRequest>,
) -> Result<(StatusCode, Json<MenuItemResponse>), AppError> {
    let item = state.menu_item_service.create(req).await?;
    Ok((
        StatusCode::CREATED,
        Json(MenuItemResponse {
            message: "Menu item created successfully".to_string(),
            item,
        }),
    ))
}

/// PATCH /admin/menu-items/update/{id}
pub async fn update_menu_item(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
    JsonBody(req): JsonBody<MenuItemRequest>,
) -> Result<Json<MenuItemResponse>, AppError> {
    let item = state.menu_item_service.update(id, req).await?;
    Ok(Json(MenuItemResponse {
        message: "Menu item updated successfully".to_string(),
        item,
    }))
}

/// DELETE /admin/delete-menu-item/{id}
pub async fn delete_menu_item(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> Result<Json<MessageResponse>, AppError> {
    state.menu_item_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Menu item deleted successfully")))
}
