//! Scoreboard API client interface and HTTP implementation
//!
//! All network I/O of the client lives behind the [`ScoreboardApi`] trait;
//! everything above it (leaderboard collection, feed, keep-alive) is
//! network-agnostic and testable against the in-memory mock.

use crate::error::{Result, ScoreboardError};
use crate::types::{Match, MatchId, NewMatch, Player, StatLine};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Trait for talking to the remote scoreboard API
#[async_trait]
pub trait ScoreboardApi: Send + Sync {
    /// Fetch all registered players
    async fn get_players(&self) -> Result<Vec<Player>>;

    /// Fetch all matches, regardless of status
    async fn get_matches(&self) -> Result<Vec<Match>>;

    /// Fetch the per-player stat lines of a single match
    async fn get_match_stats(&self, match_id: MatchId) -> Result<Vec<StatLine>>;

    /// Create a new match and return it as stored by the API
    async fn create_match(&self, new_match: &NewMatch) -> Result<Match>;

    /// Issue a no-payload request to keep the backing server awake
    async fn ping(&self) -> Result<()>;

    /// Fetch a single match by id
    ///
    /// The API exposes no per-match endpoint, so this filters the full
    /// match list client-side.
    async fn get_match(&self, match_id: MatchId) -> Result<Option<Match>> {
        let matches = self.get_matches().await?;
        Ok(matches.into_iter().find(|m| m.id == match_id))
    }
}

/// Connection settings for the HTTP client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    pub max_retry_attempts: u32,
    pub retry_delay: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            request_timeout: Duration::from_secs(30),
            max_retry_attempts: 3,
            retry_delay: Duration::from_millis(1000),
        }
    }
}

impl From<&crate::config::AppConfig> for ApiClientConfig {
    fn from(config: &crate::config::AppConfig) -> Self {
        Self {
            base_url: config.api.base_url.clone(),
            request_timeout: config.request_timeout(),
            max_retry_attempts: config.api.max_retry_attempts,
            retry_delay: config.retry_delay(),
        }
    }
}

/// Production HTTP implementation backed by reqwest
pub struct HttpScoreboardApi {
    client: reqwest::Client,
    config: ApiClientConfig,
}

impl HttpScoreboardApi {
    /// Create a new client against the configured base URL
    pub fn new(config: ApiClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ScoreboardError::InternalError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// GET `path` and decode the JSON body, retrying transient failures
    /// with a fixed delay
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let mut last_error = None;

        for attempt in 0..=self.config.max_retry_attempts {
            if attempt > 0 {
                debug!(
                    "Retrying GET {} (attempt {}/{})",
                    url, attempt, self.config.max_retry_attempts
                );
                tokio::time::sleep(self.config.retry_delay).await;
            }

            match self.try_get_json(&url, path).await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    warn!("GET {} failed: {}", url, e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ScoreboardError::RequestFailed {
                message: format!("GET {} failed with no recorded error", url),
            }
            .into()
        }))
    }

    async fn try_get_json<T: DeserializeOwned>(&self, url: &str, path: &str) -> Result<T> {
        let response = self.client.get(url).send().await.map_err(|e| {
            ScoreboardError::RequestFailed {
                message: format!("GET {}: {}", url, e),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScoreboardError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: path.to_string(),
            }
            .into());
        }

        response
            .json::<T>()
            .await
            .map_err(|e| {
                ScoreboardError::MalformedResponse {
                    endpoint: path.to_string(),
                    message: e.to_string(),
                }
                .into()
            })
    }
}

#[async_trait]
impl ScoreboardApi for HttpScoreboardApi {
    async fn get_players(&self) -> Result<Vec<Player>> {
        self.get_json("/players").await
    }

    async fn get_matches(&self) -> Result<Vec<Match>> {
        self.get_json("/matches").await
    }

    async fn get_match_stats(&self, match_id: MatchId) -> Result<Vec<StatLine>> {
        self.get_json(&format!("/player-stats/match/{}", match_id))
            .await
    }

    async fn create_match(&self, new_match: &NewMatch) -> Result<Match> {
        let url = self.url("/matches");
        let response = self
            .client
            .post(&url)
            .json(new_match)
            .send()
            .await
            .map_err(|e| ScoreboardError::RequestFailed {
                message: format!("POST {}: {}", url, e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScoreboardError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: "/matches".to_string(),
            }
            .into());
        }

        response.json::<Match>().await.map_err(|e| {
            ScoreboardError::MalformedResponse {
                endpoint: "/matches".to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    async fn ping(&self) -> Result<()> {
        // The backing server has no dedicated health endpoint; any GET
        // keeps it awake. Body is discarded.
        let url = self.url("/players");
        let response = self.client.get(&url).send().await.map_err(|e| {
            ScoreboardError::RequestFailed {
                message: format!("GET {}: {}", url, e),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScoreboardError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: "/players".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let config = ApiClientConfig {
            base_url: "http://localhost:3000/".to_string(),
            ..Default::default()
        };
        let api = HttpScoreboardApi::new(config).unwrap();
        assert_eq!(api.url("/players"), "http://localhost:3000/players");
        assert_eq!(
            api.url("/player-stats/match/7"),
            "http://localhost:3000/player-stats/match/7"
        );
    }

    #[test]
    fn test_client_config_from_app_config() {
        let app_config = crate::config::AppConfig::default();
        let client_config = ApiClientConfig::from(&app_config);
        assert_eq!(client_config.base_url, app_config.api.base_url);
        assert_eq!(client_config.max_retry_attempts, 3);
        assert_eq!(client_config.retry_delay, Duration::from_millis(1000));
    }
}
