//! Collection of aggregator inputs from the scoreboard API
//!
//! The aggregator itself performs no I/O; this module owns the caller
//! contract: select finished matches, fetch their stat lines, stamp each
//! line with the match's game, and flatten everything into one record
//! collection.

use crate::api::ScoreboardApi;
use crate::error::Result;
use crate::types::{MatchStatRecord, MatchStatus, PlayerAggregate};
use tracing::{debug, warn};

use super::aggregate::compute_aggregates;

/// Fetch and flatten the stat records of all finished matches.
///
/// A failed stats fetch for a single match degrades to "no stats for this
/// match" with a warning; it never aborts the whole collection. Fetches
/// run sequentially; the match count is small and ordering does not affect
/// the aggregate.
pub async fn collect_records(api: &dyn ScoreboardApi) -> Result<Vec<MatchStatRecord>> {
    let matches = api.get_matches().await?;
    let finished: Vec<_> = matches
        .into_iter()
        .filter(|m| m.status == MatchStatus::Finished)
        .collect();

    debug!("Collecting stats for {} finished matches", finished.len());

    let mut records = Vec::new();
    for m in &finished {
        match api.get_match_stats(m.id).await {
            Ok(lines) => {
                records.extend(
                    lines
                        .into_iter()
                        .map(|line| MatchStatRecord::from_stat_line(line, &m.game)),
                );
            }
            Err(e) => {
                warn!("Skipping stats for match {}: {}", m.id, e);
            }
        }
    }

    Ok(records)
}

/// Build the ranked leaderboard for one game: fetch the roster and all
/// finished-match records, then aggregate.
pub async fn build_leaderboard(
    api: &dyn ScoreboardApi,
    game: &str,
) -> Result<Vec<PlayerAggregate>> {
    let players = api.get_players().await?;
    let records = collect_records(api).await?;

    debug!(
        "Aggregating {} records over {} players for game {}",
        records.len(),
        players.len(),
        game
    );

    Ok(compute_aggregates(&players, &records, game))
}
