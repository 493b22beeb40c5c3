//! Form trends and the hot/cold classification built on them.

use super::rolling::RollingWindowFeature;
use super::season::SeasonAggregate;
use super::stats::{Stat, StatLine};
use crate::cli::types::Position;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Recent per-90 minus season per-90 for `stat`.
pub(crate) fn trend_between(season: &StatLine, recent: &StatLine, stat: Stat) -> f64 {
    recent.per90(stat) - season.per90(stat)
}

/// Signed difference between a recent window's per-90 rate and the season
/// per-90 rate for `stat`. Positive means the player is improving.
pub fn form_trend(season: &SeasonAggregate, recent: &RollingWindowFeature, stat: Stat) -> f64 {
    trend_between(&season.totals, &recent.totals, stat)
}

/// Points form trend, the default used for hot/cold flags.
pub fn points_form_trend(season: &SeasonAggregate, recent: &RollingWindowFeature) -> f64 {
    form_trend(season, recent, Stat::Points)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    Hot,
    Cold,
    Steady,
}

/// Thresholds for flagging hot or cold form.
///
/// A player is hot when the points trend exceeds `min_trend` and cold when
/// it falls below `-min_trend`; either flag also needs at least
/// `min_recent_minutes` in the recent window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormThresholds {
    pub min_trend: f64,
    pub min_recent_minutes: u32,
}

impl Default for FormThresholds {
    fn default() -> Self {
        Self {
            min_trend: 1.0,
            min_recent_minutes: 270,
        }
    }
}

impl FormThresholds {
    pub fn classify(&self, trend: f64, recent_minutes: u32) -> FormStatus {
        if recent_minutes < self.min_recent_minutes {
            return FormStatus::Steady;
        }
        if trend > self.min_trend {
            FormStatus::Hot
        } else if trend < -self.min_trend {
            FormStatus::Cold
        } else {
            FormStatus::Steady
        }
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Hot players, strongest upward trend first.
pub fn hot_form_players<'a>(
    aggregates: &'a [SeasonAggregate],
    thresholds: &FormThresholds,
) -> Vec<&'a SeasonAggregate> {
    let mut hot: Vec<_> = aggregates
        .iter()
        .filter(|a| a.form_status(thresholds) == FormStatus::Hot)
        .collect();
    hot.sort_by(|a, b| descending(a.form_trend_points, b.form_trend_points));
    hot
}

/// Cold players, steepest decline first.
pub fn cold_form_players<'a>(
    aggregates: &'a [SeasonAggregate],
    thresholds: &FormThresholds,
) -> Vec<&'a SeasonAggregate> {
    let mut cold: Vec<_> = aggregates
        .iter()
        .filter(|a| a.form_status(thresholds) == FormStatus::Cold)
        .collect();
    cold.sort_by(|a, b| descending(b.form_trend_points, a.form_trend_points));
    cold
}

/// `true` when no position is asked for or the player's latest position
/// matches it.
pub fn plays_in(aggregate: &SeasonAggregate, position: Option<Position>) -> bool {
    position.map_or(true, |p| aggregate.position == Some(p))
}

/// Top `top_n` players by recent-window per-90 of `stat`, among those with
/// at least `min_recent_minutes` in the window, optionally restricted to
/// one position.
///
/// The minute floor is the caller's: reporting views use anything from 180
/// to 360 depending on how strict the list should be.
pub fn recent_form_leaders<'a>(
    aggregates: &'a [SeasonAggregate],
    stat: Stat,
    min_recent_minutes: u32,
    position: Option<Position>,
    top_n: usize,
) -> Vec<&'a SeasonAggregate> {
    let mut leaders: Vec<_> = aggregates
        .iter()
        .filter(|a| a.recent_minutes() >= min_recent_minutes && plays_in(a, position))
        .collect();
    leaders.sort_by(|a, b| descending(a.recent.per90_of(stat), b.recent.per90_of(stat)));
    leaders.truncate(top_n);
    leaders
}

/// Top `top_n` players by season points per million, among priced players
/// with at least `min_season_minutes`.
pub fn best_value_players<'a>(
    aggregates: &'a [SeasonAggregate],
    min_season_minutes: u32,
    position: Option<Position>,
    top_n: usize,
) -> Vec<&'a SeasonAggregate> {
    let mut value: Vec<(&SeasonAggregate, f64)> = aggregates
        .iter()
        .filter(|a| a.totals.minutes >= min_season_minutes && plays_in(a, position))
        .filter_map(|a| a.points_per_million().map(|ppm| (a, ppm)))
        .collect();
    value.sort_by(|a, b| descending(a.1, b.1));
    value.truncate(top_n);
    value.into_iter().map(|(a, _)| a).collect()
}
