//! Rolling form aggregator.
//!
//! Turns per-player match sequences into point-in-time rolling features and
//! season-to-date aggregates:
//! - `stats`: the shared `StatLine` sum type and per-90 helpers
//! - `penalty`: the non-penalty xG estimate
//! - `rolling`: trailing-window features per match
//! - `season`: season totals and home/away splits
//! - `trend`: form trends and hot/cold flags

pub mod penalty;
pub mod rolling;
pub mod season;
pub mod stats;
pub mod trend;

#[cfg(test)]
mod tests;

pub use penalty::{estimate_penalties, NonPenaltyEstimate};
pub use rolling::{compute_rolling, RollingRow, RollingWindowFeature, DEFAULT_WINDOWS};
pub use season::{aggregate_season, SeasonAggregate, VenueSplit, RECENT_WINDOW};
pub use stats::{per_90, Per90Rates, Stat, StatLine};
pub use trend::{
    best_value_players, cold_form_players, form_trend, hot_form_players, plays_in,
    points_form_trend, recent_form_leaders, FormStatus, FormThresholds,
};

use crate::cli::types::PlayerId;
use crate::models::MatchRecord;
use crate::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Per-match rolling table plus per-player season table.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerFeatures {
    pub rolling: Vec<RollingRow>,
    pub season: Vec<SeasonAggregate>,
}

impl PlayerFeatures {
    pub fn season_for(&self, player_id: PlayerId) -> Option<&SeasonAggregate> {
        self.season.iter().find(|s| s.player_id == player_id)
    }

    pub fn rolling_for(&self, player_id: PlayerId) -> impl Iterator<Item = &RollingRow> {
        self.rolling.iter().filter(move |r| r.player_id == player_id)
    }
}

/// Split a mixed record list into per-player sequences ordered by round.
///
/// Records of the same round keep their input order.
pub fn group_by_player(records: &[MatchRecord]) -> BTreeMap<PlayerId, Vec<MatchRecord>> {
    let mut grouped: BTreeMap<PlayerId, Vec<MatchRecord>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(record.player_id)
            .or_default()
            .push(record.clone());
    }
    for sequence in grouped.values_mut() {
        sequence.sort_by_key(|r| r.round);
    }
    grouped
}

/// Rolling and season features for every player in `records`.
///
/// Players are processed independently; output is ordered by player id and
/// then by round.
pub fn compute_player_features(records: &[MatchRecord], windows: &[usize]) -> Result<PlayerFeatures> {
    let windows = rolling::normalize_windows(windows)?;
    let grouped = group_by_player(records);
    debug!(
        players = grouped.len(),
        records = records.len(),
        "computing player features"
    );

    let mut rolling = Vec::with_capacity(records.len());
    let mut season = Vec::with_capacity(grouped.len());
    for (player_id, sequence) in &grouped {
        rolling.extend(compute_rolling(sequence, &windows)?);
        season.push(aggregate_season(*player_id, sequence)?);
    }

    Ok(PlayerFeatures { rolling, season })
}
