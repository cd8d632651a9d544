//! Liveness and relay status

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::server::state::AppState;
use crate::server::types::HealthResponse;

/// GET /health
///
/// Reports where completions are relayed to without making an upstream call.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        upstream: state.config.upstream.base_url.clone(),
        default_model: state.relay.registry().default_model().to_string(),
        api_key_configured: state.config.has_api_key(),
    })
}
