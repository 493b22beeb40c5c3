//! Non-penalty expected goals, derived from an ESTIMATED penalty count.
//!
//! The data source does not say which goals were penalties. The count here
//! is a heuristic read off the match xG: a scoring match with at least
//! 0.70 xG is assumed to contain a penalty (one, or for braces with very high
//! xG, as many as `xG / 0.76` allows). It has no documented confidence bound
//! and must be presented as an estimate, never as ground truth.

use crate::models::MatchRecord;

/// xG credited to a single penalty kick.
pub const PENALTY_XG: f64 = 0.76;

/// Minimum match xG before a penalty is assumed.
pub const PENALTY_XG_TRIGGER: f64 = 0.70;

/// Above this match xG a lone goal is treated as open play.
pub const SINGLE_PENALTY_XG_CEILING: f64 = 1.5;

/// Estimated number of penalties scored in one match.
pub fn estimate_penalties(goals: f64, xg: f64) -> f64 {
    if goals < 1.0 || xg < PENALTY_XG_TRIGGER {
        return 0.0;
    }
    if xg < SINGLE_PENALTY_XG_CEILING {
        1.0
    } else if goals > 1.0 {
        let possible = (xg / PENALTY_XG).floor();
        possible.min(goals)
    } else {
        0.0
    }
}

/// Non-penalty figures for one match, built on [`estimate_penalties`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonPenaltyEstimate {
    pub penalties: f64,
    pub npxg: f64,
    pub npxa: f64,
    pub npxgi: f64,
}

impl NonPenaltyEstimate {
    pub fn for_record(record: &MatchRecord) -> Self {
        let penalties = estimate_penalties(record.goals, record.xg);
        let npxg = (record.xg - penalties * PENALTY_XG).max(0.0);
        let npxa = record.xa;
        Self {
            penalties,
            npxg,
            npxa,
            npxgi: npxg + npxa,
        }
    }
}
