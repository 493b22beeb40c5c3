//! Ranking teams by the difficulty of their upcoming fixtures.

use super::engine::FixtureDifficultyEngine;
use super::schedule::{
    chronological, first_full_gameweek, upcoming_window, DEFAULT_FULL_GAMEWEEK_RATIO,
    DEFAULT_LOOKAHEAD,
};
use super::score::{round2, DifficultyBand};
use crate::cli::types::{Gameweek, TeamId, Venue};
use crate::error::{FormError, Result};
use crate::models::{Fixture, Team, TeamFormTable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// How far ahead a ranking looks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleParams {
    /// Gameweeks covered, and the most fixtures counted per team.
    pub horizon: u16,
    pub full_gameweek_ratio: f64,
    pub lookahead: u16,
}

impl Default for ScheduleParams {
    fn default() -> Self {
        Self {
            horizon: 5,
            full_gameweek_ratio: DEFAULT_FULL_GAMEWEEK_RATIO,
            lookahead: DEFAULT_LOOKAHEAD,
        }
    }
}

impl ScheduleParams {
    pub fn with_horizon(horizon: u16) -> Self {
        Self {
            horizon,
            ..Self::default()
        }
    }
}

/// One upcoming fixture seen from one team's side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredFixture {
    pub gameweek: Gameweek,
    pub opponent: TeamId,
    pub opponent_short: String,
    pub venue: Venue,
    pub difficulty: f64,
    pub band: DifficultyBand,
}

impl ScoredFixture {
    /// "CHE (H)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.opponent_short, self.venue.short_label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamOutlook {
    pub rank: usize,
    pub team: TeamId,
    pub name: String,
    pub short_name: String,
    pub fixtures: Vec<ScoredFixture>,
    pub avg_difficulty: f64,
    pub total_difficulty: f64,
}

impl TeamOutlook {
    pub fn num_fixtures(&self) -> usize {
        self.fixtures.len()
    }

    pub fn difficulty_scores(&self) -> Vec<f64> {
        self.fixtures.iter().map(|f| f.difficulty).collect()
    }
}

/// Teams ordered easiest run first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureOutlook {
    pub current_gameweek: Gameweek,
    pub first_gameweek: Gameweek,
    pub last_gameweek: Gameweek,
    pub teams: Vec<TeamOutlook>,
}

/// Both sides of one fixture in the ranking window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedFixture {
    pub gameweek: Gameweek,
    pub home: TeamId,
    pub away: TeamId,
    pub label: String,
    pub home_difficulty: f64,
    pub away_difficulty: f64,
    pub kickoff_time: Option<String>,
}

/// Every unfinished fixture left for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureRun {
    pub team: TeamId,
    pub fixtures: Vec<ScoredFixture>,
    pub avg_difficulty: f64,
    pub easy_count: usize,
    pub hard_count: usize,
}

fn index_teams(teams: &[Team]) -> BTreeMap<TeamId, &Team> {
    teams.iter().map(|t| (t.id, t)).collect()
}

fn lookup<'a>(index: &BTreeMap<TeamId, &'a Team>, team_id: TeamId) -> Result<&'a Team> {
    index
        .get(&team_id)
        .copied()
        .ok_or(FormError::UnknownTeam { team_id })
}

fn mean(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}

impl FixtureDifficultyEngine {
    fn scored_fixture(
        &self,
        fixture: &Fixture,
        team: &Team,
        index: &BTreeMap<TeamId, &Team>,
        team_form: Option<&TeamFormTable>,
    ) -> Result<Option<ScoredFixture>> {
        let (Some(venue), Some(opponent_id), Some(gameweek)) = (
            fixture.venue_for(team.id),
            fixture.opponent_of(team.id),
            fixture.gameweek,
        ) else {
            return Ok(None);
        };
        let opponent = lookup(index, opponent_id)?;
        let difficulty = self.score_side(fixture, team, opponent, venue, team_form);

        Ok(Some(ScoredFixture {
            gameweek,
            opponent: opponent.id,
            opponent_short: opponent.short_name.clone(),
            venue,
            difficulty,
            band: DifficultyBand::from_score(difficulty),
        }))
    }

    /// Rank every team by the average difficulty of its next fixtures.
    ///
    /// The window starts at the first full gameweek at or after `current` and
    /// spans `params.horizon` gameweeks; each team counts at most
    /// `params.horizon` fixtures from it. Teams without a fixture in the
    /// window are left out. Ties keep the order of `teams`.
    pub fn rank_upcoming_fixtures(
        &self,
        teams: &[Team],
        fixtures: &[Fixture],
        current: Gameweek,
        params: &ScheduleParams,
        team_form: Option<&TeamFormTable>,
    ) -> Result<FixtureOutlook> {
        let index = index_teams(teams);
        let first = first_full_gameweek(
            fixtures,
            teams.len(),
            current,
            params.full_gameweek_ratio,
            params.lookahead,
        );
        let window = upcoming_window(fixtures, first, params.horizon);
        if window.is_empty() {
            warn!(gameweek = first.as_u16(), "no upcoming fixtures in ranking window");
        }
        if team_form.is_none() {
            debug!("no team form supplied; scoring on strength and venue only");
        }

        let mut outlooks = Vec::new();
        for team in teams {
            let mut scored = Vec::new();
            for fixture in window.iter().filter(|f| f.involves(team.id)) {
                if let Some(s) = self.scored_fixture(fixture, team, &index, team_form)? {
                    scored.push(s);
                }
            }
            scored.truncate(params.horizon as usize);
            if scored.is_empty() {
                continue;
            }

            let scores: Vec<f64> = scored.iter().map(|s| s.difficulty).collect();
            outlooks.push(TeamOutlook {
                rank: 0,
                team: team.id,
                name: team.name.clone(),
                short_name: team.short_name.clone(),
                avg_difficulty: round2(mean(&scores)),
                total_difficulty: round2(scores.iter().sum()),
                fixtures: scored,
            });
        }

        outlooks.sort_by(|a, b| {
            a.avg_difficulty
                .partial_cmp(&b.avg_difficulty)
                .unwrap_or(Ordering::Equal)
        });
        for (i, outlook) in outlooks.iter_mut().enumerate() {
            outlook.rank = i + 1;
        }

        Ok(FixtureOutlook {
            current_gameweek: current,
            first_gameweek: first,
            last_gameweek: first.offset(params.horizon.saturating_sub(1)),
            teams: outlooks,
        })
    }

    /// Home and away difficulty for every fixture in the ranking window.
    pub fn detailed_fixtures(
        &self,
        teams: &[Team],
        fixtures: &[Fixture],
        current: Gameweek,
        params: &ScheduleParams,
        team_form: Option<&TeamFormTable>,
    ) -> Result<Vec<DetailedFixture>> {
        let index = index_teams(teams);
        let first = first_full_gameweek(
            fixtures,
            teams.len(),
            current,
            params.full_gameweek_ratio,
            params.lookahead,
        );

        upcoming_window(fixtures, first, params.horizon)
            .into_iter()
            .map(|fixture| {
                let home = lookup(&index, fixture.team_h)?;
                let away = lookup(&index, fixture.team_a)?;
                Ok(DetailedFixture {
                    gameweek: fixture.gameweek.unwrap_or(first),
                    home: home.id,
                    away: away.id,
                    label: format!("{} vs {}", home.short_name, away.short_name),
                    home_difficulty: self.score_side(fixture, home, away, Venue::Home, team_form),
                    away_difficulty: self.score_side(fixture, away, home, Venue::Away, team_form),
                    kickoff_time: fixture.kickoff_time.clone(),
                })
            })
            .collect()
    }

    /// All remaining scheduled fixtures for `team_id`, in order, with band
    /// counts.
    pub fn team_fixture_run(
        &self,
        team_id: TeamId,
        teams: &[Team],
        fixtures: &[Fixture],
        team_form: Option<&TeamFormTable>,
    ) -> Result<FixtureRun> {
        let index = index_teams(teams);
        let team = lookup(&index, team_id)?;

        let mut upcoming: Vec<&Fixture> = fixtures
            .iter()
            .filter(|f| !f.finished && f.gameweek.is_some() && f.involves(team_id))
            .collect();
        upcoming.sort_by(|a, b| chronological(a, b));

        let mut scored = Vec::with_capacity(upcoming.len());
        for fixture in upcoming {
            if let Some(s) = self.scored_fixture(fixture, team, &index, team_form)? {
                scored.push(s);
            }
        }
        let scores: Vec<f64> = scored.iter().map(|s| s.difficulty).collect();

        Ok(FixtureRun {
            team: team_id,
            avg_difficulty: round2(mean(&scores)),
            easy_count: scored.iter().filter(|s| s.band == DifficultyBand::Easy).count(),
            hard_count: scored.iter().filter(|s| s.band == DifficultyBand::Hard).count(),
            fixtures: scored,
        })
    }
}

/// Rank teams with the default engine and a horizon of `horizon_n`
/// gameweeks.
pub fn rank_upcoming_fixtures(
    teams: &[Team],
    fixtures: &[Fixture],
    current: Gameweek,
    horizon_n: u16,
    team_form: Option<&TeamFormTable>,
) -> Result<FixtureOutlook> {
    FixtureDifficultyEngine::default().rank_upcoming_fixtures(
        teams,
        fixtures,
        current,
        &ScheduleParams::with_horizon(horizon_n),
        team_form,
    )
}
