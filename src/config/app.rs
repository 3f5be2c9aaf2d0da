//! Main application configuration
//!
//! This module defines the primary configuration structures for the
//! matchboard client, including environment variable loading, TOML file
//! loading, and validation.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub api: ApiSettings,
    pub keep_alive: KeepAliveSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Scoreboard API connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the scoreboard API
    pub base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_seconds: u64,
    /// Maximum retry attempts for failed requests
    pub max_retry_attempts: u32,
    /// Retry delay in milliseconds
    pub retry_delay_ms: u64,
}

/// Keep-alive pinger settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeepAliveSettings {
    /// Enable the background keep-alive pinger
    pub enabled: bool,
    /// Ping interval in seconds
    pub interval_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service: ServiceSettings::default(),
            api: ApiSettings::default(),
            keep_alive: KeepAliveSettings::default(),
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "matchboard".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            request_timeout_seconds: 30,
            max_retry_attempts: 3,
            retry_delay_ms: 1000,
        }
    }
}

impl Default for KeepAliveSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_seconds: 600, // 10 minutes
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.service.log_level = log_level;
        }

        // API settings
        if let Ok(url) = env::var("API_BASE_URL") {
            config.api.base_url = url;
        }
        if let Ok(timeout) = env::var("API_REQUEST_TIMEOUT_SECONDS") {
            config.api.request_timeout_seconds = timeout
                .parse()
                .map_err(|_| anyhow!("Invalid API_REQUEST_TIMEOUT_SECONDS value: {}", timeout))?;
        }
        if let Ok(retries) = env::var("API_MAX_RETRY_ATTEMPTS") {
            config.api.max_retry_attempts = retries
                .parse()
                .map_err(|_| anyhow!("Invalid API_MAX_RETRY_ATTEMPTS value: {}", retries))?;
        }
        if let Ok(delay) = env::var("API_RETRY_DELAY_MS") {
            config.api.retry_delay_ms = delay
                .parse()
                .map_err(|_| anyhow!("Invalid API_RETRY_DELAY_MS value: {}", delay))?;
        }

        // Keep-alive settings
        if let Ok(enabled) = env::var("KEEP_ALIVE_ENABLED") {
            config.keep_alive.enabled = enabled
                .parse()
                .map_err(|_| anyhow!("Invalid KEEP_ALIVE_ENABLED value: {}", enabled))?;
        }
        if let Ok(interval) = env::var("KEEP_ALIVE_INTERVAL_SECONDS") {
            config.keep_alive.interval_seconds = interval
                .parse()
                .map_err(|_| anyhow!("Invalid KEEP_ALIVE_INTERVAL_SECONDS value: {}", interval))?;
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Get per-request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.request_timeout_seconds)
    }

    /// Get retry delay as Duration
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.api.retry_delay_ms)
    }

    /// Get keep-alive interval as Duration
    pub fn keep_alive_interval(&self) -> Duration {
        Duration::from_secs(self.keep_alive.interval_seconds)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    // Validate API settings
    if config.api.base_url.is_empty() {
        return Err(anyhow!("API base URL cannot be empty"));
    }
    if !config.api.base_url.starts_with("http://") && !config.api.base_url.starts_with("https://") {
        return Err(anyhow!(
            "API base URL must start with http:// or https://: {}",
            config.api.base_url
        ));
    }
    if config.api.request_timeout_seconds == 0 {
        return Err(anyhow!("API request timeout must be greater than 0"));
    }

    // Validate keep-alive settings
    if config.keep_alive.interval_seconds == 0 {
        return Err(anyhow!("Keep-alive interval must be greater than 0"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.service.name, "matchboard");
        assert_eq!(config.keep_alive.interval_seconds, 600);
    }

    #[test]
    fn test_validate_rejects_bad_log_level() {
        let mut config = AppConfig::default();
        config.service.log_level = "loud".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = AppConfig::default();
        config.api.base_url = "localhost:3000".to_string();
        assert!(validate_config(&config).is_err());

        config.api.base_url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let mut config = AppConfig::default();
        config.keep_alive.interval_seconds = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_config_from_toml() {
        let toml = r#"
            [service]
            name = "matchboard-test"
            log_level = "debug"

            [api]
            base_url = "https://api.example.com"
            request_timeout_seconds = 10

            [keep_alive]
            enabled = false
            interval_seconds = 120
        "#;

        let config: AppConfig = toml::from_str(toml).unwrap();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.service.name, "matchboard-test");
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert!(!config.keep_alive.enabled);
        assert_eq!(config.keep_alive_interval(), Duration::from_secs(120));
        // Unspecified fields fall back to defaults
        assert_eq!(config.api.max_retry_attempts, 3);
    }

    #[test]
    fn test_duration_helpers() {
        let config = AppConfig::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.retry_delay(), Duration::from_millis(1000));
        assert_eq!(config.keep_alive_interval(), Duration::from_secs(600));
    }
}
