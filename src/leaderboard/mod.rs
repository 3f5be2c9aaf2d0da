//! Leaderboard aggregation
//!
//! This module turns the flat per-match stat records fetched from the API
//! into a ranked per-player table for a single game. The aggregation
//! itself is a pure function; collection of its inputs lives in
//! [`collect`].

pub mod aggregate;
pub mod collect;

// Re-export commonly used types
pub use aggregate::compute_aggregates;
pub use collect::{build_leaderboard, collect_records};
