//! Season-to-date totals, venue splits and form trends for one player.

use super::rolling::{latest_window, validate_sequence, RollingWindowFeature};
use super::stats::{Per90Rates, Stat, StatLine};
use super::trend::{trend_between, FormStatus, FormThresholds};
use crate::cli::types::{PlayerId, Position, TeamId, Venue};
use crate::error::{FormError, Result};
use crate::models::MatchRecord;
use serde::{Deserialize, Serialize};

/// Window the form trend compares against the season.
pub const RECENT_WINDOW: usize = 5;

/// Totals restricted to home or away matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VenueSplit {
    pub totals: StatLine,
    pub per90: Per90Rates,
}

impl VenueSplit {
    fn new(totals: StatLine) -> Self {
        Self {
            per90: totals.per90_rates(),
            totals,
        }
    }

    pub fn games(&self) -> u32 {
        self.totals.matches
    }
}

/// Everything known about one player's season, derived from their matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonAggregate {
    pub player_id: PlayerId,
    pub player_name: String,
    /// Team of the most recent match; `None` for a player with no matches.
    pub team: Option<TeamId>,
    /// Latest known position and price in millions.
    pub position: Option<Position>,
    pub price: Option<f64>,
    pub totals: StatLine,
    pub per90: Per90Rates,
    pub fixtures_played: u32,
    pub starts: u32,
    pub start_percentage: f64,
    pub minutes_per_fixture: f64,
    pub home: VenueSplit,
    pub away: VenueSplit,
    pub recent: RollingWindowFeature,
    pub form_trend_points: f64,
    pub form_trend_npxgi: f64,
    pub form_trend_bps: f64,
    pub home_away_points_diff: f64,
    pub home_away_xgi_diff: f64,
}

impl SeasonAggregate {
    pub fn goal_involvements(&self) -> f64 {
        self.totals.goal_involvements()
    }

    pub fn xg_overperformance(&self) -> f64 {
        self.totals.xg_overperformance()
    }

    pub fn xa_overperformance(&self) -> f64 {
        self.totals.xa_overperformance()
    }

    /// Estimate; see [`crate::form::penalty`].
    pub fn npxg_overperformance(&self) -> f64 {
        self.totals.npxg_overperformance()
    }

    pub fn split(&self, venue: Venue) -> &VenueSplit {
        match venue {
            Venue::Home => &self.home,
            Venue::Away => &self.away,
        }
    }

    /// Season points per million of current price; `None` without a price.
    pub fn points_per_million(&self) -> Option<f64> {
        self.price
            .filter(|p| *p > 0.0)
            .map(|p| self.totals.points / p)
    }

    pub fn recent_minutes(&self) -> u32 {
        self.recent.minutes()
    }

    /// Hot/cold classification of the points trend under `thresholds`.
    pub fn form_status(&self, thresholds: &FormThresholds) -> FormStatus {
        thresholds.classify(self.form_trend_points, self.recent_minutes())
    }
}

/// Aggregate one player's full match sequence.
///
/// Season totals are the merge of the home and away splits, so per-90 rates
/// recomputed from the splits always agree with the season figures. An
/// empty sequence yields an all-zero aggregate.
pub fn aggregate_season(player_id: PlayerId, records: &[MatchRecord]) -> Result<SeasonAggregate> {
    validate_sequence(records)?;
    if let Some(other) = records.iter().find(|r| r.player_id != player_id) {
        return Err(FormError::MixedPlayers {
            expected: player_id,
            found: other.player_id,
        });
    }

    let home = VenueSplit::new(StatLine::from_records(
        records.iter().filter(|r| r.venue == Venue::Home),
    ));
    let away = VenueSplit::new(StatLine::from_records(
        records.iter().filter(|r| r.venue == Venue::Away),
    ));
    let totals = home.totals + away.totals;

    let fixtures_played = records.len() as u32;
    let starts = totals.starts.max(0.0) as u32;
    let (start_percentage, minutes_per_fixture) = if fixtures_played > 0 {
        (
            starts as f64 / fixtures_played as f64 * 100.0,
            totals.minutes as f64 / fixtures_played as f64,
        )
    } else {
        (0.0, 0.0)
    };

    let recent = latest_window(records, RECENT_WINDOW);

    Ok(SeasonAggregate {
        player_id,
        player_name: records
            .last()
            .map(|r| r.player_name.clone())
            .unwrap_or_default(),
        team: records.last().map(|r| r.team),
        position: records.iter().rev().find_map(|r| r.position),
        price: records.iter().rev().find_map(|r| r.price),
        per90: totals.per90_rates(),
        fixtures_played,
        starts,
        start_percentage,
        minutes_per_fixture,
        form_trend_points: trend_between(&totals, &recent.totals, Stat::Points),
        form_trend_npxgi: trend_between(&totals, &recent.totals, Stat::Npxgi),
        form_trend_bps: trend_between(&totals, &recent.totals, Stat::Bps),
        home_away_points_diff: home.per90.points - away.per90.points,
        home_away_xgi_diff: home.per90.xgi - away.per90.xgi,
        totals,
        home,
        away,
        recent,
    })
}
