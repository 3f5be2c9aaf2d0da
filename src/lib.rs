//! Matchboard - client for a match-tracking scoreboard API
//!
//! This crate fetches players, matches, and per-match stat lines from a
//! remote scoreboard API and aggregates them client-side: a ranked
//! leaderboard per game, an active-match feed, match detail lookups, and
//! a background keep-alive pinger.

pub mod api;
pub mod config;
pub mod error;
pub mod feed;
pub mod keepalive;
pub mod leaderboard;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Result, ScoreboardError};
pub use types::*;

// Re-export key components
pub use api::{HttpScoreboardApi, MockScoreboardApi, ScoreboardApi};
pub use keepalive::KeepAlive;
pub use leaderboard::{build_leaderboard, compute_aggregates};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
