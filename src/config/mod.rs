//! Runtime configuration.
//!
//! A single JSON file with defaults for every key, validated on load.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Address the HTTP surface binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Whether add/edit/delete actions are allowed. A presentational
    /// gate, not authentication; defaults to read-only.
    #[serde(default)]
    pub write_access: bool,

    /// Upper bound on any single store call, in milliseconds
    #[serde(default = "default_op_timeout_ms")]
    pub op_timeout_ms: u64,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8090".to_string()
}

fn default_op_timeout_ms() -> u64 {
    5000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            write_access: false,
            op_timeout_ms: default_op_timeout_ms(),
        }
    }
}

impl Config {
    /// Load and validate configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.display().to_string(), e.to_string()))?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.op_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "op_timeout_ms must be > 0".to_string(),
            ));
        }
        self.bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::Invalid(format!("invalid bind_addr '{}'", self.bind_addr)))?;
        Ok(())
    }

    /// The operation timeout as a `Duration`
    pub fn op_timeout(&self) -> Duration {
        Duration::from_millis(self.op_timeout_ms)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{0}': {1}")]
    Read(String, String),

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
