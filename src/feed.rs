//! Active-match feed and match detail lookups
//!
//! These assemble the view data of the home and match pages: the list of
//! currently running matches with their rosters resolved to player names,
//! and the full stat breakdown of a single match.

use crate::api::ScoreboardApi;
use crate::error::{Result, ScoreboardError};
use crate::types::{Match, MatchDetail, MatchStatus, MatchSummary, NamedStatLine, PlayerId};
use futures::future::join_all;
use std::collections::HashMap;
use tracing::warn;

/// Display name used when a stat line references a player missing from
/// the roster
const UNKNOWN_PLAYER: &str = "Unknown";

/// List the currently active matches with their rosters.
///
/// The roster of a match comes from its stat lines, split by `team`
/// (`"A"`/`"B"`) and resolved against the player list. Stats for the
/// active matches are fetched concurrently; a failed fetch degrades to
/// empty rosters for that match.
pub async fn active_matches(api: &dyn ScoreboardApi) -> Result<Vec<MatchSummary>> {
    let matches = api.get_matches().await?;
    let players = api.get_players().await?;
    let names: HashMap<PlayerId, String> =
        players.into_iter().map(|p| (p.id, p.name)).collect();

    let active: Vec<Match> = matches
        .into_iter()
        .filter(|m| m.status == MatchStatus::Active)
        .collect();

    let stat_fetches = join_all(active.iter().map(|m| api.get_match_stats(m.id))).await;

    let feed = active
        .into_iter()
        .zip(stat_fetches)
        .map(|(m, fetched)| {
            let (team_a, team_b) = match fetched {
                Ok(lines) => {
                    let resolve = |team: &str| {
                        lines
                            .iter()
                            .filter(|l| l.team == team)
                            .map(|l| {
                                names
                                    .get(&l.player_id)
                                    .cloned()
                                    .unwrap_or_else(|| UNKNOWN_PLAYER.to_string())
                            })
                            .collect::<Vec<_>>()
                    };
                    (resolve("A"), resolve("B"))
                }
                Err(e) => {
                    warn!("No roster for active match {}: {}", m.id, e);
                    (Vec::new(), Vec::new())
                }
            };

            MatchSummary {
                id: m.id,
                game: m.game,
                score_a: m.score_a,
                score_b: m.score_b,
                team_a,
                team_b,
            }
        })
        .collect();

    Ok(feed)
}

/// Fetch one match with its stat lines and resolved player names.
pub async fn match_detail(api: &dyn ScoreboardApi, match_id: i64) -> Result<MatchDetail> {
    let match_info = api
        .get_match(match_id)
        .await?
        .ok_or(ScoreboardError::MatchNotFound { match_id })?;

    let players = api.get_players().await?;
    let names: HashMap<PlayerId, String> =
        players.into_iter().map(|p| (p.id, p.name)).collect();

    let lines = api
        .get_match_stats(match_id)
        .await?
        .into_iter()
        .map(|line| NamedStatLine {
            player_name: names
                .get(&line.player_id)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_PLAYER.to_string()),
            line,
        })
        .collect();

    Ok(MatchDetail { match_info, lines })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockScoreboardApi;
    use crate::types::{Match, MatchStatus, Player, StatLine};

    fn roster() -> Vec<Player> {
        vec![
            Player {
                id: 1,
                name: "Ann".to_string(),
            },
            Player {
                id: 2,
                name: "Bob".to_string(),
            },
        ]
    }

    fn sample_match(id: i64, status: MatchStatus) -> Match {
        Match {
            id,
            game: "CS".to_string(),
            status,
            score_a: 7,
            score_b: 5,
        }
    }

    fn line(player_id: i64, match_id: i64, team: &str) -> StatLine {
        StatLine {
            player_id,
            match_id,
            kills: 0,
            deaths: 0,
            assists: 0,
            winner: false,
            team: team.to_string(),
        }
    }

    #[tokio::test]
    async fn test_feed_lists_only_active_matches() {
        let api = MockScoreboardApi::new()
            .with_players(roster())
            .with_matches(vec![
                sample_match(1, MatchStatus::Active),
                sample_match(2, MatchStatus::Finished),
            ])
            .with_match_stats(1, vec![line(1, 1, "A"), line(2, 1, "B")]);

        let feed = active_matches(&api).await.unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].id, 1);
        assert_eq!(feed[0].team_a, vec!["Ann".to_string()]);
        assert_eq!(feed[0].team_b, vec!["Bob".to_string()]);
        assert_eq!(feed[0].score_a, 7);
    }

    #[tokio::test]
    async fn test_feed_unknown_player_fallback() {
        let api = MockScoreboardApi::new()
            .with_players(roster())
            .with_matches(vec![sample_match(1, MatchStatus::Active)])
            .with_match_stats(1, vec![line(99, 1, "A")]);

        let feed = active_matches(&api).await.unwrap();
        assert_eq!(feed[0].team_a, vec!["Unknown".to_string()]);
    }

    #[tokio::test]
    async fn test_feed_degrades_to_empty_rosters() {
        let api = MockScoreboardApi::new()
            .with_players(roster())
            .with_matches(vec![
                sample_match(1, MatchStatus::Active),
                sample_match(2, MatchStatus::Active),
            ])
            .with_match_stats(2, vec![line(2, 2, "B")])
            .failing_stats_for(1);

        let feed = active_matches(&api).await.unwrap();
        assert_eq!(feed.len(), 2);
        assert!(feed[0].team_a.is_empty());
        assert!(feed[0].team_b.is_empty());
        // The healthy match keeps its roster
        assert_eq!(feed[1].team_b, vec!["Bob".to_string()]);
    }

    #[tokio::test]
    async fn test_match_detail_resolves_names() {
        let api = MockScoreboardApi::new()
            .with_players(roster())
            .with_matches(vec![sample_match(4, MatchStatus::Finished)])
            .with_match_stats(4, vec![line(2, 4, "B")]);

        let detail = match_detail(&api, 4).await.unwrap();
        assert_eq!(detail.match_info.id, 4);
        assert_eq!(detail.lines.len(), 1);
        assert_eq!(detail.lines[0].player_name, "Bob");
    }

    #[tokio::test]
    async fn test_match_detail_unknown_match() {
        let api = MockScoreboardApi::new().with_players(roster());
        let err = match_detail(&api, 42).await.unwrap_err();
        assert!(err.to_string().contains("42"));
    }
}
