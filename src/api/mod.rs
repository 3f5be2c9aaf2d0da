//! Scoreboard API collaborator
//!
//! This module defines the client interface to the remote scoreboard API
//! and provides the production HTTP implementation plus an in-memory mock
//! for testing and development.

pub mod client;
pub mod mock;

// Re-export commonly used types
pub use client::{HttpScoreboardApi, ScoreboardApi};
pub use mock::MockScoreboardApi;
