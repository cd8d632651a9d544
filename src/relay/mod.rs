//! Commit message relay
//!
//! Validates a diff, builds the completion prompt, calls the upstream
//! completion API once and normalizes its answer. Holds no mutable state,
//! so one `CommitRelay` is shared by every request.

pub mod prompt;

use std::sync::Arc;

use serde::Serialize;

use crate::error::RelayError;
use crate::llm::completions::{CompletionClient, CompletionRequest};
use crate::llm::models::ModelRegistry;

/// A validated-on-use request to generate a commit message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitRequest {
    pub diff: String,
    pub model: Option<String>,
}

impl CommitRequest {
    pub fn new(diff: impl Into<String>) -> Self {
        Self {
            diff: diff.into(),
            model: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Successful outcome of a relay call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitMessage {
    pub commit_message: String,
    pub model_used: String,
}

pub struct CommitRelay {
    client: Arc<dyn CompletionClient>,
    registry: &'static ModelRegistry,
    max_tokens: u32,
}

impl CommitRelay {
    pub fn new(client: Arc<dyn CompletionClient>, max_tokens: u32) -> Self {
        Self {
            client,
            registry: ModelRegistry::builtin(),
            max_tokens,
        }
    }

    pub fn registry(&self) -> &'static ModelRegistry {
        self.registry
    }

    /// Model used for a request: the caller's choice, or the registry default
    /// when none (or a blank one) was given
    pub fn select_model<'a>(&self, requested: Option<&'a str>) -> &'a str {
        match requested {
            Some(model) if !model.trim().is_empty() => model,
            _ => self.registry.default_model(),
        }
    }

    pub async fn generate_commit(&self, request: &CommitRequest) -> Result<CommitMessage, RelayError> {
        let diff = request.diff.trim();
        if diff.is_empty() {
            tracing::debug!("Rejecting request with empty diff");
            return Err(RelayError::EmptyInput);
        }

        let model = self.select_model(request.model.as_deref()).to_string();
        if !self.registry.contains(&model) {
            tracing::debug!("Forwarding unregistered model {}", model);
        }

        let upstream = CompletionRequest {
            model: model.clone(),
            prompt: prompt::build_commit_prompt(diff),
            max_tokens: self.max_tokens,
        };

        tracing::info!("Generating commit message with {} ({} diff bytes)", model, diff.len());

        let text = self.client.complete(&upstream).await.map_err(|e| {
            tracing::warn!("Commit generation failed: {}", e);
            e
        })?;

        Ok(CommitMessage {
            commit_message: text.trim().to_string(),
            model_used: model,
        })
    }
}
