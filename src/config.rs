//! Configuration management for Farmgate
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from a YAML file, environment variables, and CLI
//! overrides, in that precedence order (CLI wins).

use crate::error::{FarmgateError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Farmgate
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Marketplace API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Output rendering settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Marketplace API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the marketplace API
    ///
    /// All resource paths (`/users/`, `/products/`, `/farmer/`, `/chat/`)
    /// are joined onto this base. Point it at a local mock for tests.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    "https://farmer-market-33zm.onrender.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Output rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit colored alerts and notices
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// Missing file is not an error; defaults are used so the client
    /// works out of the box against the hosted API.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::debug!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| FarmgateError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| FarmgateError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(base_url) = std::env::var("FARMGATE_API_BASE") {
            self.api.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("FARMGATE_TIMEOUT_SECONDS") {
            if let Ok(value) = timeout.parse() {
                self.api.timeout_seconds = value;
            } else {
                tracing::warn!("Invalid FARMGATE_TIMEOUT_SECONDS: {}", timeout);
            }
        }

        if let Ok(color) = std::env::var("FARMGATE_COLOR") {
            match color.parse::<bool>() {
                Ok(v) => self.output.color = v,
                Err(_) => tracing::warn!("Invalid FARMGATE_COLOR: {}", color),
            }
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if let Some(base) = &cli.api_base {
            self.api.base_url = base.clone();
        }
        if cli.no_color {
            self.output.color = false;
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`FarmgateError::Config`] when the base URL does not parse
    /// as an absolute http(s) URL or the timeout is zero.
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.api.base_url)
            .map_err(|e| FarmgateError::Config(format!("Invalid api.base_url: {}", e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(FarmgateError::Config(format!(
                "Invalid api.base_url scheme: {}",
                parsed.scheme()
            ))
            .into());
        }

        if self.api.timeout_seconds == 0 {
            return Err(
                FarmgateError::Config("api.timeout_seconds must be positive".to_string()).into(),
            );
        }

        Ok(())
    }
}
