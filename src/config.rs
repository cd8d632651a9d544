use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable holding the upstream bearer credential
pub const API_KEY_ENV: &str = "A4F_API_KEY";

/// Environment variable overriding the upstream base URL
pub const BASE_URL_ENV: &str = "COMMIT_RELAY_BASE_URL";

/// Credential sent when none is configured; upstream rejects it with a readable error
const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Settings for the completion API the relay forwards to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Bearer credential (never written back to disk)
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Completion length cap sent with every request (default: 60)
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Upper bound on a single upstream call in seconds (default: 15)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.a4f.co/v1".to_string()
}

fn default_max_tokens() -> u32 {
    60
}

fn default_timeout_secs() -> u64 {
    15
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allow any origin, method and header
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Map relay errors to 4xx/5xx instead of answering 200 with an `error` field
    #[serde(default)]
    pub error_status_codes: bool,

    /// Cap on the `/generate_commit` body in bytes; unset means no cap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_body_bytes: Option<usize>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: true,
            error_status_codes: false,
            max_body_bytes: None,
        }
    }
}

impl Config {
    /// Load from the user config file (if any), then apply environment overrides
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let config = if config_path.exists() {
            Self::read_file(&config_path)?
        } else {
            Self::default()
        };

        Ok(config.with_env_overrides())
    }

    /// Load from an explicit file, then apply environment overrides
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(Self::read_file(path)?.with_env_overrides())
    }

    fn read_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?;
        Ok(config_dir.join("commit-relay").join("config.toml"))
    }

    /// Environment wins over the file for the credential and base URL
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.upstream.api_key = Some(key);
            }
        }
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                self.upstream.base_url = url;
            }
        }
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.upstream.api_key.is_some()
    }

    /// The bearer credential, falling back to a placeholder when unset
    pub fn api_key(&self) -> &str {
        self.upstream
            .api_key
            .as_deref()
            .unwrap_or(PLACEHOLDER_API_KEY)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
