//! Error taxonomy for the commit relay.
//!
//! Every variant is converted into a structured response body at the HTTP
//! boundary; none of them terminate the process.

use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// The diff was missing or blank after trimming. No upstream call is made.
    #[error("No diff provided.")]
    EmptyInput,

    /// The request body could not be parsed as JSON.
    #[error("Invalid JSON body: {0}")]
    InvalidPayload(String),

    /// The request body could not be read (for example, over the configured size cap).
    #[error("Request body rejected: {reason}")]
    BodyRejected { status: u16, reason: String },

    /// Transport failure or timeout talking to the completion API.
    #[error("Failed to reach AI API: {0}")]
    UpstreamUnreachable(String),

    /// The completion API answered with a non-success status.
    #[error("AI API request failed with status {status}")]
    UpstreamRejected { status: u16, body: String },
}

impl RelayError {
    /// Caller-visible `error` field
    pub fn message(&self) -> &'static str {
        match self {
            RelayError::EmptyInput => "No diff provided.",
            RelayError::InvalidPayload(_) => "Invalid JSON body.",
            RelayError::BodyRejected { .. } => "Request body rejected.",
            RelayError::UpstreamUnreachable(_) => "Failed to reach AI API",
            RelayError::UpstreamRejected { .. } => "AI API request failed",
        }
    }

    /// Caller-visible `details` field, when there is one
    pub fn details(&self) -> Option<&str> {
        match self {
            RelayError::EmptyInput => None,
            RelayError::InvalidPayload(reason) => Some(reason),
            RelayError::BodyRejected { reason, .. } => Some(reason),
            RelayError::UpstreamUnreachable(reason) => Some(reason),
            RelayError::UpstreamRejected { body, .. } => Some(body),
        }
    }

    /// Status used when the server is configured to report errors via HTTP codes
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::EmptyInput | RelayError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            RelayError::BodyRejected { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_REQUEST)
            }
            RelayError::UpstreamUnreachable(_) | RelayError::UpstreamRejected { .. } => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}
