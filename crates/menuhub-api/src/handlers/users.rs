//! User administration handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use menuhub_core::error::AppError;
use menuhub_service::user::{CreateUserRequest, UpdateUserRequest};

use crate::dto::response::{MessageResponse, UserCreatedResponse, UserResponse, UsersResponse};
use crate::extractors::{AuthUser, IdPath, JsonBody};
use crate::state::AppState;

/// POST /admin/create-user
pub async fn create_user(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserCreatedResponse>), AppError> {
    let user = state.user_service.create_user(&auth, req).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserCreatedResponse {
            message: "User created successfully".to_string(),
            user_id: user.id,
        }),
    ))
}

/// PATCH /admin/update-user/{id}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    JsonBody(req): JsonBody<UpdateUserRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state.user_service.update_user(&auth, id, req).await?;
    Ok(Json(MessageResponse::new("User updated successfully")))
}

/// DELETE /admin/delete-user/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> Result<Json<MessageResponse>, AppError> {
    state.user_service.delete_user(&auth, id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}

/// GET /admin/get-users
pub async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<UsersResponse>, AppError> {
    let users = state.user_service.list_users().await?;
    Ok(Json(UsersResponse { users }))
}

/// GET /admin/current-user
pub async fn current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.current_user(&auth).await?;
    Ok(Json(UserResponse { user }))
}
