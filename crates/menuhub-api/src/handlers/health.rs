//! Health check handler.

use axum::Json;
use axum::extract::State;
use tracing::error;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database_ok = match state.repositories.health_check().await {
        Ok(ok) => ok,
        Err(e) => {
            error!(error = %e, "Database health check failed");
            false
        }
    };

    Json(HealthResponse {
        status: if database_ok { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if database_ok { "connected" } else { "unavailable" }.to_string(),
    })
}
