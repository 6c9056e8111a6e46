use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of the liveness check at `/`.
pub const LIVENESS_MESSAGE: &str = "Golden Tiger Shoes Backend is running!";

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the catalog store is reachable.
    pub db_healthy: bool,
    /// Per-request timeout enforced by the middleware stack.
    pub request_timeout_secs: u64,
}

/// GET / -- static liveness string, does not touch the store.
async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

/// GET /health -- returns service and store health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match state.store.health_check().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Store health check failed");
            false
        }
    };

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        request_timeout_secs: state.config.request_timeout_secs,
    })
}

/// Mount liveness and health routes (root level, not under `/api`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(liveness))
        .route("/health", get(health_check))
}
