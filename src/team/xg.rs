//! Team expected-goals totals built up from player match records.

use crate::cli::types::{Gameweek, TeamId, Venue};
use crate::models::MatchRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifies one match from one team's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct MatchKey {
    team: TeamId,
    round: Gameweek,
    opponent: TeamId,
    venue: Venue,
}

impl MatchKey {
    fn mirrored(&self) -> Self {
        Self {
            team: self.opponent,
            round: self.round,
            opponent: self.team,
            venue: self.venue.opposite(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct MatchXg {
    xg: f64,
    xa: f64,
}

fn per_match(total: f64, matches: u32) -> f64 {
    if matches == 0 {
        0.0
    } else {
        total / matches as f64
    }
}

/// Team xG figures restricted to home or away matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamXgSplit {
    pub matches: u32,
    pub xg: f64,
    pub xgc: f64,
    pub xgi: f64,
    pub xg_per_match: f64,
    pub xgc_per_match: f64,
}

impl TeamXgSplit {
    fn add(&mut self, xg: f64, xgc: f64, xgi: f64) {
        self.matches += 1;
        self.xg += xg;
        self.xgc += xgc;
        self.xgi += xgi;
    }

    fn finish(mut self) -> Self {
        self.xg_per_match = per_match(self.xg, self.matches);
        self.xgc_per_match = per_match(self.xgc, self.matches);
        self
    }
}

/// Season xG, xA, xGI and xGC for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamXgSummary {
    pub team: TeamId,
    pub matches_played: u32,
    pub xg: f64,
    pub xa: f64,
    pub xgi: f64,
    /// Sum of the opponents' xG in the same matches.
    pub xgc: f64,
    pub xg_per_match: f64,
    pub xgc_per_match: f64,
    pub xgi_per_match: f64,
    pub xg_differential: f64,
    pub xg_differential_per_match: f64,
    pub home: TeamXgSplit,
    pub away: TeamXgSplit,
}

impl TeamXgSummary {
    pub fn split(&self, venue: Venue) -> &TeamXgSplit {
        match venue {
            Venue::Home => &self.home,
            Venue::Away => &self.away,
        }
    }
}

/// Per-team xG summaries, ordered by team id.
///
/// Every player record of a team in a match is summed into that team's
/// match total; a team's xGC for the match is its opponent's summed xG. When
/// the opponent has no records for that match its xGC is zero.
pub fn aggregate_team_xg(records: &[MatchRecord]) -> Vec<TeamXgSummary> {
    let mut matches: BTreeMap<MatchKey, MatchXg> = BTreeMap::new();
    for record in records {
        let key = MatchKey {
            team: record.team,
            round: record.round,
            opponent: record.opponent,
            venue: record.venue,
        };
        let entry = matches.entry(key).or_default();
        entry.xg += record.xg;
        entry.xa += record.xa;
    }

    let mut summaries: BTreeMap<TeamId, TeamXgSummary> = BTreeMap::new();
    for (key, totals) in &matches {
        let xgc = matches.get(&key.mirrored()).map(|m| m.xg).unwrap_or(0.0);
        let xgi = totals.xg + totals.xa;

        let summary = summaries.entry(key.team).or_insert_with(|| TeamXgSummary {
            team: key.team,
            matches_played: 0,
            xg: 0.0,
            xa: 0.0,
            xgi: 0.0,
            xgc: 0.0,
            xg_per_match: 0.0,
            xgc_per_match: 0.0,
            xgi_per_match: 0.0,
            xg_differential: 0.0,
            xg_differential_per_match: 0.0,
            home: TeamXgSplit::default(),
            away: TeamXgSplit::default(),
        });
        summary.matches_played += 1;
        summary.xg += totals.xg;
        summary.xa += totals.xa;
        summary.xgi += xgi;
        summary.xgc += xgc;
        match key.venue {
            Venue::Home => summary.home.add(totals.xg, xgc, xgi),
            Venue::Away => summary.away.add(totals.xg, xgc, xgi),
        }
    }

    summaries
        .into_values()
        .map(|mut s| {
            s.xg_per_match = per_match(s.xg, s.matches_played);
            s.xgc_per_match = per_match(s.xgc, s.matches_played);
            s.xgi_per_match = per_match(s.xgi, s.matches_played);
            s.xg_differential = s.xg - s.xgc;
            s.xg_differential_per_match = s.xg_per_match - s.xgc_per_match;
            s.home = s.home.finish();
            s.away = s.away.finish();
            s
        })
        .collect()
}
