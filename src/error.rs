//! Error types for the scoreboard client
//!
//! This module defines all error types using anyhow for consistent error
//! handling throughout the application.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific scoreboard scenarios
#[derive(Debug, thiserror::Error)]
pub enum ScoreboardError {
    #[error("API request failed: {message}")]
    RequestFailed { message: String },

    #[error("API returned unexpected status {status} for {endpoint}")]
    UnexpectedStatus { status: u16, endpoint: String },

    #[error("Malformed API response from {endpoint}: {message}")]
    MalformedResponse { endpoint: String, message: String },

    #[error("Match not found: {match_id}")]
    MatchNotFound { match_id: i64 },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Internal client error: {message}")]
    InternalError { message: String },
}
