//! Dashboard handlers.

use axum::Json;
use axum::extract::State;

use menuhub_core::error::AppError;
use menuhub_service::DashboardStats;

use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /admin/stats
pub async fn stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<DashboardStats>, AppError> {
    Ok(Json(
        state.dashboard_service.stats_at(auth.request_time).await?,
    ))
}
