//! Configuration management for the scoreboard client
//!
//! This module handles all configuration loading from environment variables
//! and TOML files, validation, and default values.

pub mod app;

// Re-export commonly used types
pub use app::{validate_config, ApiSettings, AppConfig, KeepAliveSettings, ServiceSettings};
