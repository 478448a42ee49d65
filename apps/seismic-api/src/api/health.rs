//! Application-specific readiness check with a real database ping.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::state::AppState;

/// Readiness endpoint; unlike `/health`, this fails when the database
/// cannot be reached.
pub async fn ready_handler(State(state): State<AppState>) -> impl IntoResponse {
    match database::postgres::check_connection(&state.db).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"status": "ready", "checks": {"database": "ok"}})),
        ),
        Err(e) => {
            tracing::error!("Readiness check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not_ready",
                    "checks": {"database": e.to_string()}
                })),
            )
        }
    }
}
