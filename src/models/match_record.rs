//! Validated per-player, per-match statistics.

use crate::cli::types::{Gameweek, PlayerId, Position, TeamId, Venue};
use serde::{Deserialize, Serialize};

/// Upper bound on minutes in a single league match, stoppage time included.
pub const MAX_MATCH_MINUTES: u32 = 200;

/// One row per player per match played.
///
/// Built from the data source's raw history rows at the boundary, where
/// nullable stats become `0.0` and malformed rows (negative, fractional or
/// implausibly large minutes, unknown venue flags) are rejected. Expected goal involvement is always derived
/// from `xg + xa`, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub player_id: PlayerId,
    pub player_name: String,
    pub position: Option<Position>,
    /// Price in millions at the time of the match.
    pub price: Option<f64>,
    pub team: TeamId,
    pub opponent: TeamId,
    pub venue: Venue,
    pub round: Gameweek,
    pub minutes: u32,
    pub points: f64,
    pub goals: f64,
    pub assists: f64,
    pub xg: f64,
    pub xa: f64,
    pub defensive_contribution: f64,
    pub bonus: f64,
    pub bps: f64,
    pub goals_conceded: f64,
    pub xgc: f64,
    pub starts: f64,
    pub clean_sheets: f64,
    pub tackles: f64,
    pub clearances_blocks_interceptions: f64,
    pub recoveries: f64,
    pub influence: f64,
    pub creativity: f64,
    pub threat: f64,
}

impl MatchRecord {
    /// A record with every counting stat at zero.
    pub fn new(
        player_id: PlayerId,
        team: TeamId,
        opponent: TeamId,
        venue: Venue,
        round: Gameweek,
        minutes: u32,
    ) -> Self {
        Self {
            player_id,
            player_name: String::new(),
            position: None,
            price: None,
            team,
            opponent,
            venue,
            round,
            minutes,
            points: 0.0,
            goals: 0.0,
            assists: 0.0,
            xg: 0.0,
            xa: 0.0,
            defensive_contribution: 0.0,
            bonus: 0.0,
            bps: 0.0,
            goals_conceded: 0.0,
            xgc: 0.0,
            starts: 0.0,
            clean_sheets: 0.0,
            tackles: 0.0,
            clearances_blocks_interceptions: 0.0,
            recoveries: 0.0,
            influence: 0.0,
            creativity: 0.0,
            threat: 0.0,
        }
    }

    pub fn xgi(&self) -> f64 {
        self.xg + self.xa
    }
}
