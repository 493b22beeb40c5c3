//! Wire shapes of the data source and their conversion into domain models.

use crate::cli::types::{Gameweek, PlayerId, Position, TeamId, Venue};
use crate::error::{FormError, Result};
use crate::models::{Fixture, MatchRecord, Team, TeamForm, MAX_MATCH_MINUTES};
use serde::{Deserialize, Deserializer, Serialize};


/// Numbers may arrive as JSON numbers, numeric strings or null; anything
/// unparsable or non-finite is treated as missing.
fn float_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(parsed.filter(|v| v.is_finite()))
}

/// The home flag as providers spell it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawVenue {
    Flag(bool),
    Number(i64),
    Text(String),
}

impl TryFrom<&RawVenue> for Venue {
    type Error = FormError;

    fn try_from(raw: &RawVenue) -> Result<Self> {
        match raw {
            RawVenue::Flag(was_home) => Ok(Venue::from_home_flag(*was_home)),
            RawVenue::Number(n) => Venue::try_from(*n),
            RawVenue::Text(s) => s.parse(),
        }
    }
}

/// Position as either the numeric `element_type` or a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPosition {
    ElementType(i64),
    Name(String),
}

impl TryFrom<&RawPosition> for Position {
    type Error = FormError;

    fn try_from(raw: &RawPosition) -> Result<Self> {
        match raw {
            RawPosition::ElementType(n) => Position::try_from(*n),
            RawPosition::Name(s) => s.parse(),
        }
    }
}

/// One row of a player's match history as published by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMatchRecord {
    #[serde(alias = "player_id")]
    pub element: PlayerId,
    #[serde(default, alias = "web_name")]
    pub player_name: Option<String>,
    #[serde(default, alias = "element_type")]
    pub position: Option<RawPosition>,
    /// Price in millions.
    #[serde(default, alias = "price", deserialize_with = "float_or_none")]
    pub player_price: Option<f64>,
    /// Price in tenths of a million, as the history endpoint reports it.
    #[serde(default, deserialize_with = "float_or_none")]
    pub value: Option<f64>,
    #[serde(alias = "player_team")]
    pub team: TeamId,
    #[serde(alias = "opponent")]
    pub opponent_team: TeamId,
    #[serde(alias = "venue")]
    pub was_home: RawVenue,
    pub round: Gameweek,
    #[serde(default, deserialize_with = "float_or_none")]
    pub minutes: Option<f64>,
    #[serde(default, deserialize_with = "float_or_none")]
    pub total_points: Option<f64>,
    #[serde(default, deserialize_with = "float_or_none")]
    pub goals_scored: Option<f64>,
    #[serde(default, deserialize_with = "float_or_none")]
    pub assists: Option<f64>,
    #[serde(default, deserialize_with = "float_or_none")]
    pub expected_goals: Option<f64>,
    #[serde(default, deserialize_with = "float_or_none")]
    pub expected_assists: Option<f64>,
    #[serde(default, deserialize_with = "float_or_none")]
    pub defensive_contribution: Option<f64>,
    #[serde(default, deserialize_with = "float_or_none")]
    pub bonus: Option<f64>,
    #[serde(default, deserialize_with = "float_or_none")]
    pub bps: Option<f64>,
    #[serde(default, deserialize_with = "float_or_none")]
    pub goals_conceded: Option<f64>,
    #[serde(default, deserialize_with = "float_or_none")]
    pub expected_goals_conceded: Option<f64>,
    #[serde(default, deserialize_with = "float_or_none")]
    pub starts: Option<f64>,
    #[serde(default, deserialize_with = "float_or_none")]
    pub clean_sheets: Option<f64>,
    #[serde(default, deserialize_with = "float_or_none")]
    pub tackles: Option<f64>,
    #[serde(default, deserialize_with = "float_or_none")]
    pub clearances_blocks_interceptions: Option<f64>,
    #[serde(default, deserialize_with = "float_or_none")]
    pub recoveries: Option<f64>,
    #[serde(default, deserialize_with = "float_or_none")]
    pub influence: Option<f64>,
    #[serde(default, deserialize_with = "float_or_none")]
    pub creativity: Option<f64>,
    #[serde(default, deserialize_with = "float_or_none")]
    pub threat: Option<f64>,
}

impl RawMatchRecord {
    /// Whole minutes in `0..=MAX_MATCH_MINUTES`; a missing value counts as
    /// zero.
    fn checked_minutes(&self) -> Result<u32> {
        let minutes = self.minutes.unwrap_or(0.0);
        if minutes.fract() != 0.0 {
            return Err(FormError::InvalidMinutes {
                player_id: self.element,
                round: self.round,
                minutes,
            });
        }
        if minutes < 0.0 {
            return Err(FormError::NegativeMinutes {
                player_id: self.element,
                round: self.round,
                minutes: minutes as i64,
            });
        }
        if minutes > MAX_MATCH_MINUTES as f64 {
            return Err(FormError::InvalidMinutes {
                player_id: self.element,
                round: self.round,
                minutes,
            });
        }
        Ok(minutes as u32)
    }

    /// Price in millions, preferring the explicit field over `value`.
    fn price(&self) -> Option<f64> {
        self.player_price
            .or(self.value.map(|tenths| tenths / 10.0))
            .filter(|p| *p > 0.0)
    }
}

impl TryFrom<&RawMatchRecord> for MatchRecord {
    type Error = FormError;

    /// Missing stats become zero; bad minutes, unknown venue flags and
    /// unknown positions are rejected.
    fn try_from(raw: &RawMatchRecord) -> Result<Self> {
        let minutes = raw.checked_minutes()?;
        let venue = Venue::try_from(&raw.was_home)?;
        let position = raw.position.as_ref().map(Position::try_from).transpose()?;

        let mut record = MatchRecord::new(
            raw.element,
            raw.team,
            raw.opponent_team,
            venue,
            raw.round,
            minutes,
        );
        record.player_name = raw.player_name.clone().unwrap_or_default();
        record.position = position;
        record.price = raw.price();
        record.points = raw.total_points.unwrap_or(0.0);
        record.goals = raw.goals_scored.unwrap_or(0.0);
        record.assists = raw.assists.unwrap_or(0.0);
        record.xg = raw.expected_goals.unwrap_or(0.0);
        record.xa = raw.expected_assists.unwrap_or(0.0);
        record.defensive_contribution = raw.defensive_contribution.unwrap_or(0.0);
        record.bonus = raw.bonus.unwrap_or(0.0);
        record.bps = raw.bps.unwrap_or(0.0);
        record.goals_conceded = raw.goals_conceded.unwrap_or(0.0);
        record.xgc = raw.expected_goals_conceded.unwrap_or(0.0);
        record.starts = raw.starts.unwrap_or(0.0);
        record.clean_sheets = raw.clean_sheets.unwrap_or(0.0);
        record.tackles = raw.tackles.unwrap_or(0.0);
        record.clearances_blocks_interceptions =
            raw.clearances_blocks_interceptions.unwrap_or(0.0);
        record.recoveries = raw.recoveries.unwrap_or(0.0);
        record.influence = raw.influence.unwrap_or(0.0);
        record.creativity = raw.creativity.unwrap_or(0.0);
        record.threat = raw.threat.unwrap_or(0.0);
        Ok(record)
    }
}

/// Convert a batch of raw rows, failing on the first malformed one.
pub fn convert_records(raw: &[RawMatchRecord]) -> Result<Vec<MatchRecord>> {
    raw.iter().map(MatchRecord::try_from).collect()
}

/// Everything one data refresh produced, as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Gameweek in progress or next to be played.
    #[serde(alias = "current_event")]
    pub current_gameweek: Gameweek,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub fixtures: Vec<Fixture>,
    #[serde(default, alias = "history")]
    pub matches: Vec<RawMatchRecord>,
    /// Provider-computed team form; absent when it should be derived.
    #[serde(default)]
    pub team_form: Option<Vec<TeamForm>>,
}
