//! Configuration management for the Cubana back-office service
//!
//! This module handles loading, validation, and management of the
//! service configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use error::ConfigError;

// ==================== Configuration Types ====================

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

/// Upstream Cubana Express API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the upstream REST API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Path of the persisted session file
    #[serde(default = "default_auth_file")]
    pub auth_file: PathBuf,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            auth_file: default_auth_file(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3001/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_auth_file() -> PathBuf {
    PathBuf::from("./cubana_auth.json")
}

/// Pagination settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Records per page for historic lists
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Row cap for the "recent operations" views
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            recent_limit: default_recent_limit(),
        }
    }
}

fn default_page_size() -> usize {
    10
}

fn default_recent_limit() -> usize {
    10
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream API settings
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// Pagination settings
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::InvalidYaml { message: e.to_string() })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if self.upstream.base_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "upstream.base_url".to_string(),
            });
        }

        if self.pagination.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pagination.page_size".to_string(),
                reason: "Page size must be greater than 0".to_string(),
            });
        }

        if self.pagination.recent_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pagination.recent_limit".to_string(),
                reason: "Recent limit must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_template() {
        let config = Config::default();
        assert_eq!(config.pagination.page_size, 10);
        assert_eq!(config.pagination.recent_limit, 10);
        assert_eq!(config.upstream.base_url, "http://localhost:3001/api");
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_template_parses() {
        let config: Config = serde_yaml::from_str(Config::generate_default()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 8082);
        assert_eq!(config.upstream.base_url, "http://localhost:3001/api");
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let mut config: Config = serde_yaml::from_str(Config::generate_default()).unwrap();
        config.pagination.page_size = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_unknown_sections_are_ignored() {
        let config: Config = serde_yaml::from_str(
            "server:\n  port: 9000\ncurrency:\n  default_currency: \"CUP\"\n",
        )
        .unwrap();
        assert_eq!(config.server.port, 9000);
    }
}
