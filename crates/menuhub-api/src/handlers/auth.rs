//! Auth handlers: login, refresh, logout.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::CookieJar;
use tracing::warn;

use menuhub_auth::session::RefreshOutcome;
use menuhub_core::error::AppError;

use crate::cookies;
use crate::dto::request::LoginRequest;
use crate::dto::response::{LoginResponse, MessageResponse, RefreshResponse};
use crate::extractors::{AuthUser, JsonBody};
use crate::state::AppState;

/// POST /admin/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<(StatusCode, CookieJar, Json<LoginResponse>), AppError> {
    let grant = state
        .session_manager
        .login(
            req.email.as_deref().unwrap_or_default(),
            req.password.as_deref().unwrap_or_default(),
        )
        .await?;

    let cookie = cookies::login_cookie(
        grant.tokens.refresh_token,
        state.config.auth.refresh_cookie_max_age_days,
    );

    Ok((
        StatusCode::CREATED,
        jar.add(cookie),
        Json(LoginResponse {
            message: "Successful login".to_string(),
            access_token: grant.tokens.access_token,
            permissions: grant.permissions,
        }),
    ))
}

/// POST /admin/refresh-token
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<RefreshResponse>), AppError> {
    let outcome = state
        .session_manager
        .refresh(cookies::refresh_token(&jar))
        .await?;

    if let RefreshOutcome::Expired(reason) = &outcome {
        warn!(?reason, "Refresh refused");
    }
    let (_, tokens) = outcome.into_result()?;

    Ok((
        jar.add(cookies::session_cookie(tokens.refresh_token)),
        Json(RefreshResponse {
            access_token: tokens.access_token,
        }),
    ))
}

/// POST /admin/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    jar: CookieJar,
) -> Result<(CookieJar, Json<MessageResponse>), AppError> {
    state.session_manager.logout(auth.user_id).await?;

    Ok((
        jar.add(cookies::cleared_cookie()),
        Json(MessageResponse::new("Logged out successfully")),
    ))
}
