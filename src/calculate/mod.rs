//! Statistics calculation engine.
//!
//! Turns raw match rows into per-civilization win rates:
//! - Coerce `civ` and `leaderboard_id` to integers, dropping rows that fail
//! - Keep the ranked 1v1 ladder only
//! - Resolve civ ids to names and group by name
//! - Compute the win percentage and order by it

mod summary;

pub use summary::*;

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use crate::models::{CivLookup, CivWinrate, MatchRecord, RecordSet, REQUIRED_COLUMNS};

/// The only ladder included in the statistics.
pub const RANKED_LEADERBOARD_ID: i64 = 3;

/// Errors that abort a calculation.
#[derive(Debug, Error)]
pub enum CalculateError {
    #[error("Required column missing from input: {0}")]
    MissingColumn(String),
}

/// Calculate win percentage from wins and games played.
pub fn calculate_win_rate(wins: u32, games: u32) -> f64 {
    if games == 0 {
        0.0
    } else {
        wins as f64 / games as f64 * 100.0
    }
}

/// Round to two decimal places, ties to even.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Coerce every row, dropping the ones whose numeric fields don't parse.
pub fn clean_records(records: &RecordSet) -> Vec<MatchRecord> {
    let cleaned: Vec<MatchRecord> = records
        .records
        .iter()
        .filter_map(MatchRecord::from_raw)
        .collect();

    let excluded = records.len() - cleaned.len();
    if excluded > 0 {
        debug!(
            "Excluded {} of {} records with unparseable civ or leaderboard_id",
            excluded,
            records.len()
        );
    }

    cleaned
}

#[derive(Debug, Default)]
struct Tally {
    games: u32,
    wins: u32,
}

/// Aggregate per-civilization win rates on the ranked ladder, ordered by
/// win rate descending. Ties keep name order.
pub fn calculate_winrates(
    records: &RecordSet,
    lookup: &CivLookup,
) -> Result<Vec<CivWinrate>, CalculateError> {
    if records.is_empty() {
        return Ok(Vec::new());
    }

    if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| !records.has_column(c)) {
        return Err(CalculateError::MissingColumn(missing.to_string()));
    }

    let mut groups: BTreeMap<&str, Tally> = BTreeMap::new();
    for record in clean_records(records)
        .iter()
        .filter(|r| r.leaderboard_id == RANKED_LEADERBOARD_ID)
    {
        let tally = groups.entry(lookup.name_of(record.civ)).or_default();
        tally.games += 1;
        if record.won {
            tally.wins += 1;
        }
    }

    let mut results: Vec<CivWinrate> = groups
        .into_iter()
        .map(|(name, tally)| {
            CivWinrate::new(
                name,
                round_to_hundredths(calculate_win_rate(tally.wins, tally.games)),
                tally.games,
            )
        })
        .collect();

    // Stable: equal win rates stay in name order
    results.sort_by(|a, b| b.winrate.total_cmp(&a.winrate));

    Ok(results)
}
