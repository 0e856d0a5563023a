//! Client configuration.
//!
//! Settings can be built in code, loaded from a TOML file, or injected
//! through `HYPOTHESIS_AGENT_KEY` / `HYPOTHESIS_API_URL`.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Default service base URL
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3001/api";

/// Default whole-request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default connect timeout in milliseconds
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;

/// Environment variable holding the agent key
pub const AGENT_KEY_ENV: &str = "HYPOTHESIS_AGENT_KEY";

/// Environment variable overriding the endpoint
pub const ENDPOINT_ENV: &str = "HYPOTHESIS_API_URL";

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),
}

/// Client settings
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Service base URL (e.g. "http://localhost:3001/api")
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Agent credential sent as `X-Agent-Key`
    pub agent_key: String,

    /// Whole-request timeout in milliseconds
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,

    /// Connection establishment timeout in milliseconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_ms: u64,

    /// User-Agent header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_connect_timeout() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_MS
}

fn default_user_agent() -> String {
    format!("hypothesis-sdk/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Create a configuration with default settings for the given agent key
    pub fn new(agent_key: impl Into<String>) -> Self {
        Self {
            endpoint: default_endpoint(),
            agent_key: agent_key.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            user_agent: default_user_agent(),
        }
    }

    /// Override the endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX).max(1);
        self
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = toml::from_str(contents)?;

        if config.agent_key.trim().is_empty() {
            return Err(ConfigError::MissingField("agent_key".to_string()));
        }

        Ok(config)
    }

    /// Build configuration from `HYPOTHESIS_AGENT_KEY` and optional `HYPOTHESIS_API_URL`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let agent_key = lookup(AGENT_KEY_ENV)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingField(AGENT_KEY_ENV.to_string()))?;

        let mut config = Self::new(agent_key);
        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|url| !url.trim().is_empty()) {
            config.endpoint = endpoint;
        }
        Ok(config)
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Connect timeout as a `Duration`
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}
