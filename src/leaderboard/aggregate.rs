//! Pure per-player aggregation over match stat records

use crate::types::{MatchStatRecord, Player, PlayerAggregate, PlayerId};
use crate::utils::round2;
use std::collections::HashMap;

/// Compute the ranked per-player aggregate table for one game.
///
/// Records for other games are filtered out (case-sensitive match on
/// `game`). Players with no matching record are omitted entirely rather
/// than emitted as zero rows. The result is sorted descending by winrate,
/// ties broken descending by KDA; remaining ties keep the input order of
/// `players` (the sort is stable).
///
/// Pure and total over well-typed inputs: no I/O, no mutation of inputs,
/// deterministic. Duplicate player ids are a caller precondition and are
/// not deduplicated. Negative stat counts are not validated; the
/// arithmetic is garbage-in/garbage-out.
pub fn compute_aggregates(
    players: &[Player],
    records: &[MatchStatRecord],
    game: &str,
) -> Vec<PlayerAggregate> {
    let mut by_player: HashMap<PlayerId, Vec<&MatchStatRecord>> = HashMap::new();
    for record in records.iter().filter(|r| r.game == game) {
        by_player.entry(record.player_id).or_default().push(record);
    }

    let mut rows: Vec<PlayerAggregate> = players
        .iter()
        .filter_map(|player| {
            let group = by_player.get(&player.id)?;
            Some(aggregate_one(player, group))
        })
        .collect();

    rows.sort_by(|a, b| {
        b.winrate
            .cmp(&a.winrate)
            .then_with(|| b.kda.total_cmp(&a.kda))
    });

    rows
}

fn aggregate_one(player: &Player, records: &[&MatchStatRecord]) -> PlayerAggregate {
    let wins = records.iter().filter(|r| r.winner).count() as u32;
    let losses = records.iter().filter(|r| !r.winner).count() as u32;
    let games = wins + losses;
    // games > 0 is guaranteed: the group is non-empty
    let winrate = ((wins as f64 / games as f64) * 100.0).round() as u32;

    let kills: i64 = records.iter().map(|r| r.kills).sum();
    let deaths: i64 = records.iter().map(|r| r.deaths).sum();
    let assists: i64 = records.iter().map(|r| r.assists).sum();
    let kda = if deaths > 0 {
        round2((kills + assists) as f64 / deaths as f64)
    } else {
        (kills + assists) as f64
    };

    PlayerAggregate {
        id: player.id,
        name: player.name.clone(),
        wins,
        losses,
        games,
        winrate,
        kills,
        deaths,
        assists,
        kda,
    }
}
