//! Server types and DTOs
//!
//! Request parsing is deliberately lenient: the relay answers every body with
//! a well-formed JSON object, so fields are read out of a `serde_json::Value`
//! instead of failing deserialization.

use serde::Serialize;
use serde_json::Value;

use crate::error::RelayError;
use crate::llm::models::{ModelCategory, ModelRegistry};
use crate::relay::CommitRequest;

// ============================================================================
// Request/Response DTOs
// ============================================================================

/// Read `{diff, model?}` out of an arbitrary JSON body.
///
/// A missing or non-string `diff` becomes an empty diff. A missing or null
/// `model` means "use the default"; any other non-string `model` is an
/// invalid payload rather than being silently replaced.
pub fn commit_request_from_json(payload: &Value) -> Result<CommitRequest, RelayError> {
    let diff = payload
        .get("diff")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let model = match payload.get("model") {
        None | Some(Value::Null) => None,
        Some(Value::String(model)) => Some(model.clone()),
        Some(other) => {
            return Err(RelayError::InvalidPayload(format!(
                "`model` must be a string, got {}",
                other
            )))
        }
    };

    Ok(CommitRequest {
        diff: diff.to_string(),
        model,
    })
}

/// Error body: `{error, details?}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&RelayError> for ErrorResponse {
    fn from(err: &RelayError) -> Self {
        Self {
            error: err.message().to_string(),
            details: err.details().map(str::to_string),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Completion API requests are relayed to
    pub upstream: String,
    pub default_model: String,
    /// False when the relay runs with the placeholder credential
    pub api_key_configured: bool,
}

/// One registry category and its identifiers, in registry order
#[derive(Debug, Serialize)]
pub struct ModelCategoryDto {
    pub category: ModelCategory,
    pub models: Vec<String>,
}

/// Registry listing
#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub default_model: String,
    pub categories: Vec<ModelCategoryDto>,
}

impl From<&ModelRegistry> for ModelsResponse {
    fn from(registry: &ModelRegistry) -> Self {
        Self {
            default_model: registry.default_model().to_string(),
            categories: registry
                .categories()
                .map(|(category, models)| ModelCategoryDto {
                    category,
                    models: models.iter().map(|m| m.to_string()).collect(),
                })
                .collect(),
        }
    }
}
