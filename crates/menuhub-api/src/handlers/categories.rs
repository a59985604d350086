//! Category handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use menuhub_core::error::AppError;
use menuhub_entity::category::Category;
use menuhub_service::catalog::CategoryRequest;

use crate::dto::response::{ApiResponse, SuccessMessage};
use crate::extractors::{AuthUser, IdPath, JsonBody};
use crate::state::AppState;

/// GET /admin/get-categories
pub async fn list_categories(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Category>>>, AppError> {
    let categories = state.category_service.list().await?;
    Ok(Json(ApiResponse::ok(categories)))
}

/// GET /admin/get-category/{id}
pub async fn get_category(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<Category>>, AppError> {
    let category = state.category_service.get(id).await?;
    Ok(Json(ApiResponse::ok(category)))
}

/// POST /admin/create-category
pub async fn create_category(
    State(state): State<AppState>,
    _auth: AuthUser,
    JsonBody(req): JsonBody<CategoryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Category>>), AppError> {
    let category = state.category_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(category))))
}

/// PATCH /admin/update-category/{id}
pub async fn update_category(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
    JsonBody(req): JsonBody<CategoryRequest>,
) -> Result<Json<ApiResponse<Category>>, AppError> {
    let category = state.category_service.update(id, req).await?;
    Ok(Json(ApiResponse::ok(category)))
}

/// DELETE /admin/delete-category/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> Result<Json<SuccessMessage>, AppError> {
    state.category_service.delete(id).await?;
    Ok(Json(SuccessMessage {
        success: true,
        message: "Category deleted successfully".to_string(),
    }))
}
