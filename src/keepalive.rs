//! Background keep-alive pinger
//!
//! Free-tier hosting idles the backing server after a period without
//! traffic; a repeating no-payload request keeps it warm. The pinger is a
//! process-scoped background task with an explicit start/stop lifecycle.

use crate::api::ScoreboardApi;
use crate::utils::current_timestamp;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Repeating pinger against the scoreboard API
pub struct KeepAlive {
    api: Arc<dyn ScoreboardApi>,
    interval: Duration,
    handle: Option<JoinHandle<()>>,
}

impl KeepAlive {
    /// Create a stopped pinger with the given interval
    pub fn new(api: Arc<dyn ScoreboardApi>, interval: Duration) -> Self {
        Self {
            api,
            interval,
            handle: None,
        }
    }

    /// Start the schedule: one immediate ping, then one per interval.
    ///
    /// Idempotent; calling start on a running pinger is a no-op. Ping
    /// failures are logged and never stop the schedule.
    pub fn start(&mut self) {
        if self.handle.is_some() {
            return;
        }

        let api = self.api.clone();
        let period = self.interval;

        info!("Starting keep-alive pinger ({}s interval)", period.as_secs());
        self.handle = Some(tokio::spawn(async move {
            // The first tick completes immediately
            let mut interval = tokio::time::interval(period);

            loop {
                interval.tick().await;
                match api.ping().await {
                    Ok(()) => debug!("Keep-alive ping sent at {}", current_timestamp()),
                    Err(e) => warn!("Keep-alive ping failed: {}", e),
                }
            }
        }));
    }

    /// Cancel the schedule. Idempotent.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!("Keep-alive pinger stopped");
        }
    }

    /// Whether the schedule is currently running
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for KeepAlive {
    fn drop(&mut self) {
        self.stop();
    }
}
