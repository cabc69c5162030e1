//! Session configuration.
//!
//! A `SessionConfig` is deserialized from TOML. Every field has a default, so
//! an empty document is a valid configuration that connects to a local
//! engine over TCP.
//!
//! ```toml
//! [engine]
//! transport = "tcp"
//! host = "127.0.0.1"
//! port = 3000
//! connect_timeout_ms = 5000
//!
//! [agent]
//! seed = 42
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use gvgai_contracts::{
    agent::AgentSettings,
    error::{ClientError, ClientResult},
};

/// How the session reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// Connect to the engine over TCP.
    #[default]
    Tcp,
    /// Exchange lines over the process's stdin and stdout.
    Stdio,
}

/// Where and how to reach the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub transport: TransportKind,
    /// Engine host; ignored for `stdio`.
    pub host: String,
    /// Engine port; ignored for `stdio`.
    pub port: u16,
    /// Upper bound on each TCP connection attempt.
    pub connect_timeout_ms: u64,
}

impl EngineConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 3000;
    pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 5000;

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            transport: TransportKind::Tcp,
            host: Self::DEFAULT_HOST.to_string(),
            port: Self::DEFAULT_PORT,
            connect_timeout_ms: Self::DEFAULT_CONNECT_TIMEOUT_MS,
        }
    }
}

/// The top-level structure deserialized from a TOML configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    pub engine: EngineConfig,
    pub agent: AgentSettings,
}

impl SessionConfig {
    /// Parse `s` as TOML.
    ///
    /// Returns `ClientError::ConfigError` if the TOML is malformed, has
    /// unknown keys, or has values of the wrong type.
    pub fn from_toml_str(s: &str) -> ClientResult<Self> {
        let config: SessionConfig = toml::from_str(s).map_err(|e| ClientError::ConfigError {
            reason: format!("failed to parse session TOML: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read the file at `path` and parse it as TOML.
    pub fn from_file(path: &Path) -> ClientResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ClientError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Reject settings no transport can work with.
    pub fn validate(&self) -> ClientResult<()> {
        if self.engine.transport == TransportKind::Tcp && self.engine.host.trim().is_empty() {
            return Err(ClientError::ConfigError {
                reason: "engine.host must not be empty for the tcp transport".to_string(),
            });
        }
        if self.engine.connect_timeout_ms == 0 {
            return Err(ClientError::ConfigError {
                reason: "engine.connect_timeout_ms must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
