//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! Configuration is loaded once at startup and handed to the components that need it.

use std::env;
use std::time::Duration;

use crate::constants::{
    DEFAULT_LOG_LEVEL, DEFAULT_MAX_BODY_BYTES, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_UPSTREAM_BASE_URL, DEFAULT_UPSTREAM_TIMEOUT_SECS,
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub log_format: LogFormat,
    pub max_body_bytes: usize,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Upstream profile API configuration
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL, without trailing slash
    pub base_url: String,
    /// Timeout applied to each outbound request
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            upstream: UpstreamConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            log_format: LogFormat::parse(
                &env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
            )?,
            max_body_bytes: env::var("MAX_BODY_BYTES")
                .unwrap_or_else(|_| DEFAULT_MAX_BODY_BYTES.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("MAX_BODY_BYTES".to_string()))?,
        })
    }
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue("LOG_FORMAT".to_string())),
        }
    }
}

impl UpstreamConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var("UPSTREAM_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE_URL.to_string());
        let timeout_secs = env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("UPSTREAM_TIMEOUT_SECS".to_string()))?;

        Self::new(&base_url, Duration::from_secs(timeout_secs))
    }

    /// Build an upstream configuration, validating the base URL and timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let parsed = reqwest::Url::parse(base_url)
            .map_err(|_| ConfigError::InvalidValue("UPSTREAM_API_BASE_URL".to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue("UPSTREAM_API_BASE_URL".to_string()));
        }
        if timeout.is_zero() {
            return Err(ConfigError::InvalidValue("UPSTREAM_TIMEOUT_SECS".to_string()));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::Pretty,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }

    #[test]
    fn test_upstream_trims_trailing_slash() {
        let upstream =
            UpstreamConfig::new("https://alfa-leetcode-api.onrender.com/", Duration::from_secs(10))
                .unwrap();
        assert_eq!(upstream.base_url, "https://alfa-leetcode-api.onrender.com");
        assert_eq!(upstream.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_upstream_rejects_invalid_values() {
        assert!(UpstreamConfig::new("not a url", Duration::from_secs(10)).is_err());
        assert!(UpstreamConfig::new("ftp://example.com", Duration::from_secs(10)).is_err());
        assert!(UpstreamConfig::new("https://example.com", Duration::ZERO).is_err());
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json").unwrap(), LogFormat::Json);
        assert_eq!(LogFormat::parse("Pretty").unwrap(), LogFormat::Pretty);
        assert!(LogFormat::parse("xml").is_err());
    }
}
