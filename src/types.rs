//! Common types used throughout the scoreboard client

use serde::{Deserialize, Serialize};

/// Unique identifier for players, assigned by the API
pub type PlayerId = i64;

/// Unique identifier for matches, assigned by the API
pub type MatchId = i64;

/// Lifecycle status of a match as reported by the API
///
/// The upstream status set is open-ended, so anything that is not
/// `ACTIVE` or `FINISHED` round-trips through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MatchStatus {
    Active,
    Finished,
    Other(String),
}

impl From<String> for MatchStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "ACTIVE" => MatchStatus::Active,
            "FINISHED" => MatchStatus::Finished,
            _ => MatchStatus::Other(s),
        }
    }
}

impl From<MatchStatus> for String {
    fn from(status: MatchStatus) -> Self {
        status.to_string()
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::Active => write!(f, "ACTIVE"),
            MatchStatus::Finished => write!(f, "FINISHED"),
            MatchStatus::Other(s) => write!(f, "{}", s),
        }
    }
}

/// A registered player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

/// A match as returned by `GET /matches`
///
/// The API names its score fields `Ascore` / `Bscore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub game: String,
    pub status: MatchStatus,
    #[serde(rename = "Ascore")]
    pub score_a: i64,
    #[serde(rename = "Bscore")]
    pub score_b: i64,
}

/// One player's line in a single match, as returned by
/// `GET /player-stats/match/{id}`
///
/// The wire shape carries no game identifier; that is stamped on by the
/// caller from the owning match (see [`MatchStatRecord`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLine {
    pub player_id: PlayerId,
    pub match_id: MatchId,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    pub winner: bool,
    /// Team assignment within the match, `"A"` or `"B"`
    pub team: String,
}

/// A stat line stamped with the game of the match it belongs to
///
/// This is the aggregator's input unit: one record per (player, match)
/// pair, flattened across all finished matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStatRecord {
    pub player_id: PlayerId,
    pub match_id: MatchId,
    pub game: String,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    pub winner: bool,
}

impl MatchStatRecord {
    /// Stamp a wire stat line with its match's game
    pub fn from_stat_line(line: StatLine, game: &str) -> Self {
        Self {
            player_id: line.player_id,
            match_id: line.match_id,
            game: game.to_string(),
            kills: line.kills,
            deaths: line.deaths,
            assists: line.assists,
            winner: line.winner,
        }
    }
}

/// Aggregated per-player performance for one game, derived output of the
/// leaderboard aggregator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerAggregate {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub games: u32,
    /// Rounded win percentage, 0..=100
    pub winrate: u32,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    /// (kills + assists) / deaths rounded to two decimals, or the raw
    /// kills + assists sum when deaths is zero
    pub kda: f64,
}

/// An active match with its rosters resolved to player names, for the
/// home feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub id: MatchId,
    pub game: String,
    pub score_a: i64,
    pub score_b: i64,
    pub team_a: Vec<String>,
    pub team_b: Vec<String>,
}

/// A match with its per-player stat lines and resolved names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDetail {
    pub match_info: Match,
    pub lines: Vec<NamedStatLine>,
}

/// A stat line paired with the player's display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedStatLine {
    pub player_name: String,
    pub line: StatLine,
}

/// Payload for `POST /matches`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMatch {
    pub game: String,
    pub team_a: Vec<PlayerId>,
    pub team_b: Vec<PlayerId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_status_round_trip() {
        let json = "\"FINISHED\"";
        let status: MatchStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status, MatchStatus::Finished);
        assert_eq!(serde_json::to_string(&status).unwrap(), json);

        let odd: MatchStatus = serde_json::from_str("\"PAUSED\"").unwrap();
        assert_eq!(odd, MatchStatus::Other("PAUSED".to_string()));
        assert_eq!(serde_json::to_string(&odd).unwrap(), "\"PAUSED\"");
    }

    #[test]
    fn test_match_score_field_names() {
        let json = r#"{"id":7,"game":"CS","status":"ACTIVE","Ascore":13,"Bscore":9}"#;
        let m: Match = serde_json::from_str(json).unwrap();
        assert_eq!(m.score_a, 13);
        assert_eq!(m.score_b, 9);
        assert_eq!(m.status, MatchStatus::Active);
    }

    #[test]
    fn test_stat_record_stamping() {
        let line = StatLine {
            player_id: 1,
            match_id: 4,
            kills: 10,
            deaths: 2,
            assists: 3,
            winner: true,
            team: "A".to_string(),
        };

        let record = MatchStatRecord::from_stat_line(line, "CS");
        assert_eq!(record.game, "CS");
        assert_eq!(record.player_id, 1);
        assert_eq!(record.match_id, 4);
        assert!(record.winner);
    }
}
