//! Commit message generation endpoint

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::RelayError;
use crate::server::state::AppState;
use crate::server::types::{commit_request_from_json, ErrorResponse};

/// POST /generate_commit
///
/// Answers `{commit_message, model_used}` or `{error, details?}`. Errors use
/// status 200 unless `server.error_status_codes` is enabled. A body that
/// cannot be buffered still gets a JSON error, never a plain-text rejection.
pub async fn generate_commit(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let outcome = match body {
        Ok(body) => relay_body(&state, &body).await,
        Err(rejection) => {
            tracing::warn!("Rejecting unreadable request body: {}", rejection.body_text());
            Err(RelayError::BodyRejected {
                status: rejection.status().as_u16(),
                reason: rejection.body_text(),
            })
        }
    };

    match outcome {
        Ok(message) => (StatusCode::OK, Json(message)).into_response(),
        Err(err) => {
            let status = if state.error_status_codes() {
                err.status_code()
            } else {
                StatusCode::OK
            };
            (status, Json(ErrorResponse::from(&err))).into_response()
        }
    }
}

async fn relay_body(
    state: &AppState,
    body: &[u8],
) -> Result<crate::relay::CommitMessage, RelayError> {
    let payload = serde_json::from_slice::<serde_json::Value>(body).map_err(|e| {
        tracing::debug!("Rejecting unparsable request body: {}", e);
        RelayError::InvalidPayload(e.to_string())
    })?;

    let request = commit_request_from_json(&payload)?;
    state.relay.generate_commit(&request).await
}
