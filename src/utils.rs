//! Utility functions for the scoreboard client

use chrono::{DateTime, Utc};

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Round to two decimal places, the way the scoreboard reports KDA
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
