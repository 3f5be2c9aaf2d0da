//! Mock scoreboard API for testing and development

use crate::error::{Result, ScoreboardError};
use crate::types::{Match, MatchId, MatchStatus, NewMatch, Player, StatLine};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use super::client::ScoreboardApi;

/// In-memory API implementation with failure injection and call counting
#[derive(Debug, Default)]
pub struct MockScoreboardApi {
    players: RwLock<Vec<Player>>,
    matches: RwLock<Vec<Match>>,
    stats: RwLock<HashMap<MatchId, Vec<StatLine>>>,
    /// Match ids whose stats fetch should fail
    failing_stats: RwLock<HashSet<MatchId>>,
    /// Fail all pings when set
    fail_ping: RwLock<bool>,
    ping_count: AtomicU64,
}

impl MockScoreboardApi {
    /// Create an empty mock API
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the roster
    pub fn with_players(self, players: Vec<Player>) -> Self {
        if let Ok(mut guard) = self.players.write() {
            *guard = players;
        }
        self
    }

    /// Seed the match list
    pub fn with_matches(self, matches: Vec<Match>) -> Self {
        if let Ok(mut guard) = self.matches.write() {
            *guard = matches;
        }
        self
    }

    /// Seed the stat lines of one match
    pub fn with_match_stats(self, match_id: MatchId, lines: Vec<StatLine>) -> Self {
        if let Ok(mut guard) = self.stats.write() {
            guard.insert(match_id, lines);
        }
        self
    }

    /// Make the stats fetch for a match fail
    pub fn failing_stats_for(self, match_id: MatchId) -> Self {
        if let Ok(mut guard) = self.failing_stats.write() {
            guard.insert(match_id);
        }
        self
    }

    /// Make all pings fail
    pub fn set_ping_failure(&self, fail: bool) {
        if let Ok(mut guard) = self.fail_ping.write() {
            *guard = fail;
        }
    }

    /// Number of pings received so far
    pub fn ping_count(&self) -> u64 {
        self.ping_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScoreboardApi for MockScoreboardApi {
    async fn get_players(&self) -> Result<Vec<Player>> {
        let players = self
            .players
            .read()
            .map_err(|_| ScoreboardError::InternalError {
                message: "Failed to acquire players read lock".to_string(),
            })?;
        Ok(players.clone())
    }

    async fn get_matches(&self) -> Result<Vec<Match>> {
        let matches = self
            .matches
            .read()
            .map_err(|_| ScoreboardError::InternalError {
                message: "Failed to acquire matches read lock".to_string(),
            })?;
        Ok(matches.clone())
    }

    async fn get_match_stats(&self, match_id: MatchId) -> Result<Vec<StatLine>> {
        let failing = self
            .failing_stats
            .read()
            .map_err(|_| ScoreboardError::InternalError {
                message: "Failed to acquire failure-set read lock".to_string(),
            })?;
        if failing.contains(&match_id) {
            return Err(ScoreboardError::UnexpectedStatus {
                status: 500,
                endpoint: format!("/player-stats/match/{}", match_id),
            }
            .into());
        }

        let stats = self
            .stats
            .read()
            .map_err(|_| ScoreboardError::InternalError {
                message: "Failed to acquire stats read lock".to_string(),
            })?;
        Ok(stats.get(&match_id).cloned().unwrap_or_default())
    }

    async fn create_match(&self, new_match: &NewMatch) -> Result<Match> {
        let mut matches = self
            .matches
            .write()
            .map_err(|_| ScoreboardError::InternalError {
                message: "Failed to acquire matches write lock".to_string(),
            })?;

        let id = matches.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        let created = Match {
            id,
            game: new_match.game.clone(),
            status: MatchStatus::Active,
            score_a: 0,
            score_b: 0,
        };
        matches.push(created.clone());
        Ok(created)
    }

    async fn ping(&self) -> Result<()> {
        self.ping_count.fetch_add(1, Ordering::SeqCst);

        let fail = self
            .fail_ping
            .read()
            .map_err(|_| ScoreboardError::InternalError {
                message: "Failed to acquire ping-flag read lock".to_string(),
            })?;
        if *fail {
            return Err(ScoreboardError::RequestFailed {
                message: "Injected ping failure".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: i64, name: &str) -> Player {
        Player {
            id,
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_returns_seeded_data() {
        let api = MockScoreboardApi::new()
            .with_players(vec![player(1, "Ann")])
            .with_matches(vec![Match {
                id: 1,
                game: "CS".to_string(),
                status: MatchStatus::Finished,
                score_a: 13,
                score_b: 7,
            }]);

        assert_eq!(api.get_players().await.unwrap().len(), 1);
        assert_eq!(api.get_matches().await.unwrap().len(), 1);
        // Unknown match yields empty stats, not an error
        assert!(api.get_match_stats(99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mock_failure_injection() {
        let api = MockScoreboardApi::new().failing_stats_for(3);
        assert!(api.get_match_stats(3).await.is_err());
        assert!(api.get_match_stats(4).await.is_ok());

        api.set_ping_failure(true);
        assert!(api.ping().await.is_err());
        assert_eq!(api.ping_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_create_match_assigns_next_id() {
        let api = MockScoreboardApi::new().with_matches(vec![Match {
            id: 5,
            game: "CS".to_string(),
            status: MatchStatus::Finished,
            score_a: 0,
            score_b: 0,
        }]);

        let created = api
            .create_match(&NewMatch {
                game: "LOL".to_string(),
                team_a: vec![1, 2],
                team_b: vec![3, 4],
            })
            .await
            .unwrap();

        assert_eq!(created.id, 6);
        assert_eq!(created.status, MatchStatus::Active);
        assert_eq!(api.get_matches().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_default_get_match_filters_list() {
        let api = MockScoreboardApi::new().with_matches(vec![
            Match {
                id: 1,
                game: "CS".to_string(),
                status: MatchStatus::Active,
                score_a: 2,
                score_b: 3,
            },
            Match {
                id: 2,
                game: "LOL".to_string(),
                status: MatchStatus::Finished,
                score_a: 1,
                score_b: 0,
            },
        ]);

        let found = api.get_match(2).await.unwrap();
        assert_eq!(found.unwrap().game, "LOL");
        assert!(api.get_match(42).await.unwrap().is_none());
    }
}
