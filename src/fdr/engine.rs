//! Configured difficulty scorer with an optional memo.

use super::score::{
    published_or_fallback, score_fixture_with, DifficultyMode, FallbackParams, FdrWeights,
};
use crate::cli::types::Venue;
use crate::config::AnalysisConfig;
use crate::core::{form_fingerprint, DifficultyCache, DifficultyKey};
use crate::models::{Fixture, Team, TeamFormTable};

/// Scores fixtures with one set of weights, fallback parameters and mode.
///
/// Scoring is a pure function of its inputs; the optional memo only avoids
/// recomputing identical (team, opponent, venue, form rows) scores within one
/// data snapshot.
pub struct FixtureDifficultyEngine {
    weights: FdrWeights,
    fallback: FallbackParams,
    mode: DifficultyMode,
    cache: Option<DifficultyCache>,
    snapshot: u64,
}

impl FixtureDifficultyEngine {
    pub fn new(weights: FdrWeights, fallback: FallbackParams, mode: DifficultyMode) -> Self {
        Self {
            weights,
            fallback,
            mode,
            cache: None,
            snapshot: 0,
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.weights, config.fallback, config.difficulty_mode)
    }

    /// Memoize model scores for data snapshot `snapshot`.
    pub fn with_cache(mut self, capacity: usize, snapshot: u64) -> Self {
        self.cache = Some(DifficultyCache::new(capacity));
        self.snapshot = snapshot;
        self
    }

    pub fn weights(&self) -> &FdrWeights {
        &self.weights
    }

    pub fn mode(&self) -> DifficultyMode {
        self.mode
    }

    pub fn cache(&self) -> Option<&DifficultyCache> {
        self.cache.as_ref()
    }

    /// Weighted-model difficulty for `team` facing `opponent` at `venue`.
    pub fn score(
        &self,
        team: &Team,
        opponent: &Team,
        venue: Venue,
        team_form: Option<&TeamFormTable>,
    ) -> f64 {
        let compute = || score_fixture_with(team, opponent, venue, team_form, &self.weights);
        match &self.cache {
            Some(cache) => cache.get_or_insert_with(
                DifficultyKey {
                    team: team.id,
                    opponent: opponent.id,
                    venue,
                    snapshot: self.snapshot,
                    form: team_form.map(|t| form_fingerprint(t, &[team.id, opponent.id])),
                },
                compute,
            ),
            None => compute(),
        }
    }

    /// Difficulty of one side of `fixture` under the engine's mode.
    pub fn score_side(
        &self,
        fixture: &Fixture,
        team: &Team,
        opponent: &Team,
        venue: Venue,
        team_form: Option<&TeamFormTable>,
    ) -> f64 {
        match self.mode {
            DifficultyMode::Model => self.score(team, opponent, venue, team_form),
            DifficultyMode::Published => {
                published_or_fallback(fixture, opponent, venue, &self.fallback)
            }
        }
    }
}

impl Default for FixtureDifficultyEngine {
    fn default() -> Self {
        Self::new(
            FdrWeights::default(),
            FallbackParams::default(),
            DifficultyMode::default(),
        )
    }
}
