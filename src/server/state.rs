//! Server state management
//!
//! Everything here is built once at startup and only read afterwards, so the
//! state is shared across requests behind a plain `Arc` without locks.

use std::sync::Arc;

use crate::config::Config;
use crate::llm::completions::{CompletionClient, HttpCompletionClient};
use crate::relay::CommitRelay;

/// Shared application state for the server
pub struct AppState {
    /// Application configuration
    pub config: Arc<Config>,

    /// The relay handling `/generate_commit`
    pub relay: CommitRelay,
}

impl AppState {
    /// Create state that talks to the configured completion API
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = HttpCompletionClient::from_config(&config)?;
        Ok(Self::with_client(config, Arc::new(client)))
    }

    /// Create state around an arbitrary completion client
    pub fn with_client(config: Config, client: Arc<dyn CompletionClient>) -> Self {
        let relay = CommitRelay::new(client, config.upstream.max_tokens);
        Self {
            config: Arc::new(config),
            relay,
        }
    }

    pub fn error_status_codes(&self) -> bool {
        self.config.server.error_status_codes
    }
}
