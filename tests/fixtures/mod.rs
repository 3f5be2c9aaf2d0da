//! Shared fixtures for integration tests

use matchboard::api::MockScoreboardApi;
use matchboard::types::{Match, MatchStatus, Player, StatLine};

pub fn player(id: i64, name: &str) -> Player {
    Player {
        id,
        name: name.to_string(),
    }
}

pub fn finished_match(id: i64, game: &str) -> Match {
    Match {
        id,
        game: game.to_string(),
        status: MatchStatus::Finished,
        score_a: 13,
        score_b: 7,
    }
}

pub fn active_match(id: i64, game: &str) -> Match {
    Match {
        id,
        game: game.to_string(),
        status: MatchStatus::Active,
        score_a: 3,
        score_b: 2,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn stat_line(
    player_id: i64,
    match_id: i64,
    kills: i64,
    deaths: i64,
    assists: i64,
    winner: bool,
    team: &str,
) -> StatLine {
    StatLine {
        player_id,
        match_id,
        kills,
        deaths,
        assists,
        winner,
        team: team.to_string(),
    }
}

/// A small seeded system: two players, one finished CS match, one finished
/// LOL match, and one active CS match.
pub fn seeded_api() -> MockScoreboardApi {
    MockScoreboardApi::new()
        .with_players(vec![player(1, "Ann"), player(2, "Bob")])
        .with_matches(vec![
            finished_match(1, "CS"),
            finished_match(2, "LOL"),
            active_match(3, "CS"),
        ])
        .with_match_stats(
            1,
            vec![
                stat_line(1, 1, 10, 2, 3, true, "A"),
                stat_line(2, 1, 4, 8, 1, false, "B"),
            ],
        )
        .with_match_stats(2, vec![stat_line(1, 2, 3, 4, 11, false, "A")])
        .with_match_stats(
            3,
            vec![
                stat_line(1, 3, 0, 0, 0, false, "A"),
                stat_line(2, 3, 0, 0, 0, false, "B"),
            ],
        )
}
