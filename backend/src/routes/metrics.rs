//! Prometheus metrics endpoint

use crate::state::AppState;
use axum::{extract::State, http::StatusCode};

/// GET /metrics - Prometheus text exposition
///
/// Returns 404 when no recorder was installed.
pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics()
        .map(|handle| handle.render())
        .ok_or(StatusCode::NOT_FOUND)
}
