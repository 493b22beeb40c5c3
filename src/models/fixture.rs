//! Scheduled matches between two teams.

use crate::cli::types::{Gameweek, TeamId, Venue};
use serde::{Deserialize, Serialize};

/// A scheduled match as published by the fixture provider.
///
/// Only `finished` (and the scores that come with it) ever change after the
/// provider creates a fixture. `gameweek` is absent for postponed fixtures
/// that have not been rescheduled yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(rename = "event", default)]
    pub gameweek: Option<Gameweek>,
    pub team_h: TeamId,
    pub team_a: TeamId,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub kickoff_time: Option<String>,
    #[serde(default)]
    pub team_h_score: Option<u32>,
    #[serde(default)]
    pub team_a_score: Option<u32>,
    /// Provider-published difficulty for the home side, when available.
    #[serde(default)]
    pub team_h_difficulty: Option<u8>,
    #[serde(default)]
    pub team_a_difficulty: Option<u8>,
}

impl Fixture {
    pub fn new(gameweek: Gameweek, team_h: TeamId, team_a: TeamId) -> Self {
        Self {
            id: None,
            gameweek: Some(gameweek),
            team_h,
            team_a,
            finished: false,
            kickoff_time: None,
            team_h_score: None,
            team_a_score: None,
            team_h_difficulty: None,
            team_a_difficulty: None,
        }
    }

    /// Mark the fixture finished with a final score.
    pub fn with_result(mut self, home_goals: u32, away_goals: u32) -> Self {
        self.finished = true;
        self.team_h_score = Some(home_goals);
        self.team_a_score = Some(away_goals);
        self
    }

    pub fn involves(&self, team: TeamId) -> bool {
        self.team_h == team || self.team_a == team
    }

    /// Venue `team` plays at in this fixture, if it plays at all.
    pub fn venue_for(&self, team: TeamId) -> Option<Venue> {
        if self.team_h == team {
            Some(Venue::Home)
        } else if self.team_a == team {
            Some(Venue::Away)
        } else {
            None
        }
    }

    pub fn opponent_of(&self, team: TeamId) -> Option<TeamId> {
        match self.venue_for(team)? {
            Venue::Home => Some(self.team_a),
            Venue::Away => Some(self.team_h),
        }
    }

    pub fn published_difficulty(&self, venue: Venue) -> Option<u8> {
        match venue {
            Venue::Home => self.team_h_difficulty,
            Venue::Away => self.team_a_difficulty,
        }
    }
}
