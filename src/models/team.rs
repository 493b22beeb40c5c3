//! Teams, their strength ratings and the optional team-form table.

use crate::cli::types::{TeamId, Venue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Venue-specific strength ratings published by the data source.
///
/// Values are normalized integers, typically between 1000 and 1400.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStrength {
    #[serde(rename = "strength_overall_home")]
    pub overall_home: u32,
    #[serde(rename = "strength_overall_away")]
    pub overall_away: u32,
    #[serde(rename = "strength_attack_home", default)]
    pub attack_home: u32,
    #[serde(rename = "strength_attack_away", default)]
    pub attack_away: u32,
    #[serde(rename = "strength_defence_home", default)]
    pub defence_home: u32,
    #[serde(rename = "strength_defence_away", default)]
    pub defence_away: u32,
}

impl TeamStrength {
    /// Same rating for every venue and facet; mostly useful in tests.
    pub fn uniform(rating: u32) -> Self {
        Self {
            overall_home: rating,
            overall_away: rating,
            attack_home: rating,
            attack_away: rating,
            defence_home: rating,
            defence_away: rating,
        }
    }

    /// Overall rating of this team when it plays at `venue`.
    pub fn overall_at(&self, venue: Venue) -> u32 {
        match venue {
            Venue::Home => self.overall_home,
            Venue::Away => self.overall_away,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub short_name: String,
    #[serde(flatten)]
    pub strength: TeamStrength,
}

impl Team {
    pub fn new(id: TeamId, name: &str, short_name: &str, strength: TeamStrength) -> Self {
        Self {
            id,
            name: name.to_string(),
            short_name: short_name.to_string(),
            strength,
        }
    }
}

/// Recent scoring form for one team.
///
/// Any field may be missing when the provider could not compute it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamForm {
    pub team: TeamId,
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub goals_per_game: Option<f64>,
    #[serde(default)]
    pub goals_conceded_per_game: Option<f64>,
    #[serde(default)]
    pub clean_sheet_percentage: Option<f64>,
}

impl TeamForm {
    pub fn new(team: TeamId, goals_per_game: f64, goals_conceded_per_game: f64) -> Self {
        Self {
            team,
            games_played: 0,
            goals_per_game: Some(goals_per_game),
            goals_conceded_per_game: Some(goals_conceded_per_game),
            clean_sheet_percentage: None,
        }
    }
}

/// Team form keyed by team.
pub type TeamFormTable = BTreeMap<TeamId, TeamForm>;

/// Index a list of form rows by team; later rows replace earlier ones.
pub fn team_form_table(rows: impl IntoIterator<Item = TeamForm>) -> TeamFormTable {
    rows.into_iter().map(|row| (row.team, row)).collect()
}
