//! Difficulty of a single fixture for one side.

use crate::cli::types::Venue;
use crate::models::{Fixture, Team, TeamForm, TeamFormTable};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_DIFFICULTY: f64 = 1.0;
pub const MAX_DIFFICULTY: f64 = 5.0;

/// Goals conceded per game assumed for an opponent whose row lacks the field.
const DEFAULT_CONCEDED_PER_GAME: f64 = 1.5;
/// Goals per game assumed for an opponent whose row lacks the field.
const DEFAULT_OPPONENT_GOALS_PER_GAME: f64 = 1.5;
/// Goals per game assumed for the scored team itself when its row lacks the field.
const DEFAULT_OWN_GOALS_PER_GAME: f64 = 1.0;

/// Weights of the difficulty model.
///
/// The defaults are empirical; they are kept as data so they can be
/// recalibrated from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FdrWeights {
    /// Multiplier on the scaled opponent strength.
    pub base_strength: f64,
    /// Strength ratings are divided by this before scaling.
    pub strength_divisor: f64,
    pub strength_scale: f64,
    /// Flat term added when the scored team is at home.
    pub home_adjustment: f64,
    /// Flat term added when the scored team is away.
    pub away_adjustment: f64,
    pub defensive_form: f64,
    pub attacking_form: f64,
    pub own_form: f64,
    /// Cap on the own-form reduction.
    pub own_form_cap: f64,
}

impl Default for FdrWeights {
    fn default() -> Self {
        Self {
            base_strength: 0.4,
            strength_divisor: 1000.0,
            strength_scale: 5.0,
            home_adjustment: -0.5,
            away_adjustment: 0.5,
            defensive_form: 0.8,
            attacking_form: 0.4,
            own_form: 1.0,
            own_form_cap: 0.5,
        }
    }
}

impl FdrWeights {
    fn venue_adjustment(&self, venue: Venue) -> f64 {
        match venue {
            Venue::Home => self.home_adjustment,
            Venue::Away => self.away_adjustment,
        }
    }

    pub(crate) fn all_finite(&self) -> bool {
        [
            self.base_strength,
            self.strength_divisor,
            self.strength_scale,
            self.home_adjustment,
            self.away_adjustment,
            self.defensive_form,
            self.attacking_form,
            self.own_form,
            self.own_form_cap,
        ]
        .iter()
        .all(|w| w.is_finite())
    }
}

/// Strength-only fallback used when no published difficulty exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackParams {
    /// Rating mapped to difficulty 1.
    pub strength_floor: f64,
    /// Rating range mapped onto the 1..5 scale.
    pub strength_span: f64,
    pub home_multiplier: f64,
    pub away_multiplier: f64,
}

impl Default for FallbackParams {
    fn default() -> Self {
        Self {
            strength_floor: 1000.0,
            strength_span: 400.0,
            home_multiplier: 0.85,
            away_multiplier: 1.15,
        }
    }
}

/// Which scorer the ranking uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyMode {
    /// Weighted strength + venue + form model.
    #[default]
    Model,
    /// Provider-published difficulty, else the strength-only fallback.
    Published,
}

/// Coarse reading of a difficulty score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyBand {
    Easy,
    Medium,
    Hard,
}

impl DifficultyBand {
    pub fn from_score(score: f64) -> Self {
        if score < 2.5 {
            DifficultyBand::Easy
        } else if score < 3.5 {
            DifficultyBand::Medium
        } else {
            DifficultyBand::Hard
        }
    }
}

impl fmt::Display for DifficultyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DifficultyBand::Easy => "Easy",
            DifficultyBand::Medium => "Medium",
            DifficultyBand::Hard => "Hard",
        };
        write!(f, "{}", s)
    }
}

/// Each term of the model before clamping, plus the final score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyBreakdown {
    pub base_strength: f64,
    pub venue: f64,
    pub opponent_defence: f64,
    pub opponent_attack: f64,
    pub own_form: f64,
    pub raw: f64,
    pub score: f64,
}

fn clamp_unit(value: f64, max: f64) -> f64 {
    value.clamp(0.0, max)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn finalize(raw: f64) -> f64 {
    if raw.is_finite() {
        round2(raw.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY))
    } else {
        MAX_DIFFICULTY
    }
}

fn form_row<'a>(form: Option<&'a TeamFormTable>, team: &Team) -> Option<&'a TeamForm> {
    form?.get(&team.id)
}

fn finite_or(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(default)
}

/// Overall rating of `opponent` in the venue it occupies when the scored
/// team plays at `venue`.
pub fn opponent_strength(opponent: &Team, venue: Venue) -> u32 {
    opponent.strength.overall_at(venue.opposite())
}

/// Term-by-term difficulty for `team` facing `opponent` at `venue`.
///
/// Form terms contribute nothing when there is no form table or no row for
/// the team in question.
pub fn difficulty_breakdown(
    team: &Team,
    opponent: &Team,
    venue: Venue,
    team_form: Option<&TeamFormTable>,
    weights: &FdrWeights,
) -> DifficultyBreakdown {
    let strength = opponent_strength(opponent, venue) as f64;
    let base_strength = if weights.strength_divisor > 0.0 {
        strength / weights.strength_divisor * weights.strength_scale * weights.base_strength
    } else {
        0.0
    };

    let venue_term = weights.venue_adjustment(venue);

    let (opponent_defence, opponent_attack) = match form_row(team_form, opponent) {
        Some(row) => {
            let conceded = finite_or(row.goals_conceded_per_game, DEFAULT_CONCEDED_PER_GAME);
            let scored = finite_or(row.goals_per_game, DEFAULT_OPPONENT_GOALS_PER_GAME);
            (
                clamp_unit((2.0 - conceded) / 1.5, 1.0) * weights.defensive_form,
                clamp_unit((scored - 0.5) / 2.0, 1.0) * weights.attacking_form,
            )
        }
        None => (0.0, 0.0),
    };

    let own_form = match form_row(team_form, team) {
        Some(row) => {
            let scored = finite_or(row.goals_per_game, DEFAULT_OWN_GOALS_PER_GAME);
            -clamp_unit((scored - 1.0) / 2.0, weights.own_form_cap.max(0.0)) * weights.own_form
        }
        None => 0.0,
    };

    let raw = base_strength + venue_term + opponent_defence + opponent_attack + own_form;

    DifficultyBreakdown {
        base_strength,
        venue: venue_term,
        opponent_defence,
        opponent_attack,
        own_form,
        raw,
        score: finalize(raw),
    }
}

/// Difficulty in [1, 5] for `team` facing `opponent` at `venue` under the
/// given weights. Lower is easier.
pub fn score_fixture_with(
    team: &Team,
    opponent: &Team,
    venue: Venue,
    team_form: Option<&TeamFormTable>,
    weights: &FdrWeights,
) -> f64 {
    difficulty_breakdown(team, opponent, venue, team_form, weights).score
}

/// Difficulty in [1, 5] with the default weights.
///
/// # Examples
///
/// ```rust
/// use fpl_form::{score_fixture, Team, TeamId, TeamStrength, Venue};
///
/// let team = Team::new(TeamId::new(1), "Arsenal", "ARS", TeamStrength::uniform(1200));
/// let opponent = Team::new(TeamId::new(2), "Chelsea", "CHE", TeamStrength::uniform(1300));
///
/// let home = score_fixture(&team, &opponent, Venue::Home, None);
/// let away = score_fixture(&team, &opponent, Venue::Away, None);
/// assert_eq!(home, 2.1);
/// assert_eq!(away, 3.1);
/// ```
pub fn score_fixture(
    team: &Team,
    opponent: &Team,
    venue: Venue,
    team_form: Option<&TeamFormTable>,
) -> f64 {
    score_fixture_with(team, opponent, venue, team_form, &FdrWeights::default())
}

/// Strength-only difficulty: the opponent's venue rating mapped from
/// `[floor, floor + span]` onto `[1, 5]`, then scaled for venue.
pub fn fallback_difficulty(opponent: &Team, venue: Venue, params: &FallbackParams) -> f64 {
    let strength = opponent_strength(opponent, venue) as f64;
    let normalized = if params.strength_span > 0.0 {
        1.0 + 4.0 * (strength - params.strength_floor) / params.strength_span
    } else {
        MIN_DIFFICULTY
    };
    let multiplier = match venue {
        Venue::Home => params.home_multiplier,
        Venue::Away => params.away_multiplier,
    };
    finalize(normalized * multiplier)
}

/// The provider's published difficulty for `venue`'s side of `fixture`,
/// or the strength-only fallback when none is published.
pub fn published_or_fallback(
    fixture: &Fixture,
    opponent: &Team,
    venue: Venue,
    params: &FallbackParams,
) -> f64 {
    match fixture.published_difficulty(venue) {
        Some(published) => finalize(published as f64),
        None => fallback_difficulty(opponent, venue, params),
    }
}
