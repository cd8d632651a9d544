//! Client for the upstream text-completion endpoint
//!
//! Speaks the legacy OpenAI-style `POST {base_url}/completions` API:
//! `{model, prompt, max_tokens}` in, `{choices: [{text}]}` out.

use std::error::Error as StdError;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;

use crate::config::Config;
use crate::error::RelayError;

/// Body sent to the completion endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Issue one completion call and return the first choice's raw text.
    ///
    /// A success response whose body lacks the expected structure yields an
    /// empty string, not an error.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, RelayError>;
}

/// reqwest-backed client with a bounded per-call timeout
pub struct HttpCompletionClient {
    api_key: String,
    /// Base URL without trailing slash (e.g. "https://api.a4f.co/v1")
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpCompletionClient {
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self {
            api_key,
            base_url,
            timeout,
            client,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.upstream.base_url.clone(),
            config.api_key().to_string(),
            config.upstream.timeout(),
        )
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn endpoint(&self) -> String {
        format!("{}/completions", self.base_url)
    }

    fn describe_transport_error(&self, err: &reqwest::Error) -> String {
        if err.is_timeout() {
            return format!("Request timed out after {}s", self.timeout.as_secs_f64());
        }

        let mut description = err.to_string();
        let mut source = StdError::source(err);
        while let Some(cause) = source {
            description.push_str(": ");
            description.push_str(&cause.to_string());
            source = StdError::source(cause);
        }
        description
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, RelayError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| RelayError::UpstreamUnreachable(self.describe_transport_error(&e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RelayError::UpstreamUnreachable(self.describe_transport_error(&e)))?;

        if !status.is_success() {
            tracing::warn!("Completion API returned {}", status);
            return Err(RelayError::UpstreamRejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(extract_completion_text(&body))
    }
}

/// Pull `choices[0].text` out of a completion body, or "" when it is not there
pub fn extract_completion_text(body: &str) -> String {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Completion API returned a non-JSON success body: {}", e);
            return String::new();
        }
    };

    value
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("text"))
        .and_then(|text| text.as_str())
        .unwrap_or_default()
        .to_string()
}
