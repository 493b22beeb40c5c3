//! Stat sums shared by window, split and season aggregates.

use super::penalty::NonPenaltyEstimate;
use crate::models::MatchRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Minutes in a full match; per-90 rates normalise to this.
pub const FULL_MATCH_MINUTES: f64 = 90.0;

/// `total * 90 / minutes`, or `0.0` when no minutes were played.
pub fn per_90(total: f64, minutes: u32) -> f64 {
    if minutes > 0 {
        total * FULL_MATCH_MINUTES / minutes as f64
    } else {
        0.0
    }
}

/// A statistic that can be summed and normalised per 90 minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Points,
    Goals,
    Assists,
    Xg,
    Xa,
    Xgi,
    Npxg,
    Npxgi,
    GoalInvolvements,
    DefensiveContribution,
    Tackles,
    Bonus,
    Bps,
    GoalsConceded,
    Xgc,
    CleanSheets,
    Starts,
    ClearancesBlocksInterceptions,
    Recoveries,
    Influence,
    Creativity,
    Threat,
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stat::Points => "points",
            Stat::Goals => "goals",
            Stat::Assists => "assists",
            Stat::Xg => "xG",
            Stat::Xa => "xA",
            Stat::Xgi => "xGI",
            Stat::Npxg => "npxG",
            Stat::Npxgi => "npxGI",
            Stat::GoalInvolvements => "goal involvements",
            Stat::DefensiveContribution => "defensive contribution",
            Stat::Tackles => "tackles",
            Stat::Bonus => "bonus",
            Stat::Bps => "bps",
            Stat::GoalsConceded => "goals conceded",
            Stat::Xgc => "xGC",
            Stat::CleanSheets => "clean sheets",
            Stat::Starts => "starts",
            Stat::ClearancesBlocksInterceptions => "CBI",
            Stat::Recoveries => "recoveries",
            Stat::Influence => "influence",
            Stat::Creativity => "creativity",
            Stat::Threat => "threat",
        };
        write!(f, "{}", s)
    }
}

/// Summed raw statistics over some set of matches.
///
/// The same type backs rolling windows, venue splits and season totals, so
/// derived figures (goal involvements, over-performance) are computed the
/// same way at every granularity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatLine {
    pub matches: u32,
    pub minutes: u32,
    pub points: f64,
    pub goals: f64,
    pub assists: f64,
    pub xg: f64,
    pub xa: f64,
    pub xgi: f64,
    /// Non-penalty xG; relies on the estimated penalty count.
    pub npxg: f64,
    pub npxgi: f64,
    pub estimated_penalties: f64,
    pub defensive_contribution: f64,
    pub tackles: f64,
    pub bonus: f64,
    pub bps: f64,
    pub goals_conceded: f64,
    pub xgc: f64,
    pub clean_sheets: f64,
    pub starts: f64,
    pub clearances_blocks_interceptions: f64,
    pub recoveries: f64,
    pub influence: f64,
    pub creativity: f64,
    pub threat: f64,
}

impl StatLine {
    pub fn from_record(record: &MatchRecord) -> Self {
        let estimate = NonPenaltyEstimate::for_record(record);
        Self {
            matches: 1,
            minutes: record.minutes,
            points: record.points,
            goals: record.goals,
            assists: record.assists,
            xg: record.xg,
            xa: record.xa,
            xgi: record.xgi(),
            npxg: estimate.npxg,
            npxgi: estimate.npxgi,
            estimated_penalties: estimate.penalties,
            defensive_contribution: record.defensive_contribution,
            tackles: record.tackles,
            bonus: record.bonus,
            bps: record.bps,
            goals_conceded: record.goals_conceded,
            xgc: record.xgc,
            clean_sheets: record.clean_sheets,
            starts: record.starts,
            clearances_blocks_interceptions: record.clearances_blocks_interceptions,
            recoveries: record.recoveries,
            influence: record.influence,
            creativity: record.creativity,
            threat: record.threat,
        }
    }

    /// Sum a run of records in order.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a MatchRecord>) -> Self {
        records.into_iter().map(StatLine::from_record).sum()
    }

    pub fn value(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Points => self.points,
            Stat::Goals => self.goals,
            Stat::Assists => self.assists,
            Stat::Xg => self.xg,
            Stat::Xa => self.xa,
            Stat::Xgi => self.xgi,
            Stat::Npxg => self.npxg,
            Stat::Npxgi => self.npxgi,
            Stat::GoalInvolvements => self.goal_involvements(),
            Stat::DefensiveContribution => self.defensive_contribution,
            Stat::Tackles => self.tackles,
            Stat::Bonus => self.bonus,
            Stat::Bps => self.bps,
            Stat::GoalsConceded => self.goals_conceded,
            Stat::Xgc => self.xgc,
            Stat::CleanSheets => self.clean_sheets,
            Stat::Starts => self.starts,
            Stat::ClearancesBlocksInterceptions => self.clearances_blocks_interceptions,
            Stat::Recoveries => self.recoveries,
            Stat::Influence => self.influence,
            Stat::Creativity => self.creativity,
            Stat::Threat => self.threat,
        }
    }

    pub fn per90(&self, stat: Stat) -> f64 {
        per_90(self.value(stat), self.minutes)
    }

    pub fn goal_involvements(&self) -> f64 {
        self.goals + self.assists
    }

    pub fn xg_overperformance(&self) -> f64 {
        self.goals - self.xg
    }

    pub fn xa_overperformance(&self) -> f64 {
        self.assists - self.xa
    }

    /// Estimate: non-penalty goals minus npxG.
    pub fn npxg_overperformance(&self) -> f64 {
        (self.goals - self.estimated_penalties) - self.npxg
    }

    pub fn per90_rates(&self) -> Per90Rates {
        Per90Rates {
            points: self.per90(Stat::Points),
            goals: self.per90(Stat::Goals),
            assists: self.per90(Stat::Assists),
            xg: self.per90(Stat::Xg),
            xa: self.per90(Stat::Xa),
            xgi: self.per90(Stat::Xgi),
            npxg: self.per90(Stat::Npxg),
            npxgi: self.per90(Stat::Npxgi),
            goal_involvements: self.per90(Stat::GoalInvolvements),
            defensive_contribution: self.per90(Stat::DefensiveContribution),
            tackles: self.per90(Stat::Tackles),
            bonus: self.per90(Stat::Bonus),
            bps: self.per90(Stat::Bps),
            clearances_blocks_interceptions: self.per90(Stat::ClearancesBlocksInterceptions),
            recoveries: self.per90(Stat::Recoveries),
            influence: self.per90(Stat::Influence),
            creativity: self.per90(Stat::Creativity),
            threat: self.per90(Stat::Threat),
        }
    }
}

impl AddAssign for StatLine {
    fn add_assign(&mut self, other: Self) {
        self.matches = self.matches.saturating_add(other.matches);
        self.minutes = self.minutes.saturating_add(other.minutes);
        self.points += other.points;
        self.goals += other.goals;
        self.assists += other.assists;
        self.xg += other.xg;
        self.xa += other.xa;
        self.xgi += other.xgi;
        self.npxg += other.npxg;
        self.npxgi += other.npxgi;
        self.estimated_penalties += other.estimated_penalties;
        self.defensive_contribution += other.defensive_contribution;
        self.tackles += other.tackles;
        self.bonus += other.bonus;
        self.bps += other.bps;
        self.goals_conceded += other.goals_conceded;
        self.xgc += other.xgc;
        self.clean_sheets += other.clean_sheets;
        self.starts += other.starts;
        self.clearances_blocks_interceptions += other.clearances_blocks_interceptions;
        self.recoveries += other.recoveries;
        self.influence += other.influence;
        self.creativity += other.creativity;
        self.threat += other.threat;
    }
}

impl Add for StatLine {
    type Output = StatLine;

    fn add(mut self, other: Self) -> Self::Output {
        self += other;
        self
    }
}

impl Sum for StatLine {
    fn sum<I: Iterator<Item = StatLine>>(iter: I) -> Self {
        iter.fold(StatLine::default(), |acc, line| acc + line)
    }
}

/// Per-90 snapshot of the headline stats, for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Per90Rates {
    pub points: f64,
    pub goals: f64,
    pub assists: f64,
    pub xg: f64,
    pub xa: f64,
    pub xgi: f64,
    pub npxg: f64,
    pub npxgi: f64,
    pub goal_involvements: f64,
    pub defensive_contribution: f64,
    pub tackles: f64,
    pub bonus: f64,
    pub bps: f64,
    pub clearances_blocks_interceptions: f64,
    pub recoveries: f64,
    pub influence: f64,
    pub creativity: f64,
    pub threat: f64,
}
