//! Common utilities and helper functions shared across commands.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    config::AnalysisConfig,
    fdr::FixtureDifficultyEngine,
    models::{Fixture, MatchRecord, Team, TeamFormTable},
    source::{DataSource, SnapshotSource, TeamFormProvider},
    Gameweek, Result, TeamId,
};

/// Context containing the data and settings every command works from
pub struct CommandContext {
    pub config: AnalysisConfig,
    pub records: Vec<MatchRecord>,
    pub teams: Vec<Team>,
    pub fixtures: Vec<Fixture>,
    pub current: Gameweek,
    pub team_form: Option<TeamFormTable>,
    pub fingerprint: u64,
}

impl CommandContext {
    /// Resolve the config and load everything from `source`.
    pub fn from_source(source: &SnapshotSource, config: AnalysisConfig) -> Result<Self> {
        let records = source.list_matches_for_all_players()?;
        let teams = source.list_teams()?;
        let fixtures = source.list_fixtures()?;
        let current = source.current_gameweek()?;
        let team_form = source.team_form()?;
        info!(
            records = records.len(),
            teams = teams.len(),
            fixtures = fixtures.len(),
            gameweek = current.as_u16(),
            "snapshot ready"
        );
        if team_form.is_none() {
            debug!("snapshot has no team form");
        }

        Ok(Self {
            config,
            records,
            teams,
            fixtures,
            current,
            team_form,
            fingerprint: source.fingerprint(),
        })
    }

    /// Load a snapshot file together with the resolved config.
    pub fn load(snapshot: &Path, config: Option<&Path>) -> Result<Self> {
        let config = AnalysisConfig::resolve(config)?;
        let source = SnapshotSource::from_path(snapshot)?;
        Self::from_source(&source, config)
    }

    /// Difficulty engine for this snapshot, memoized when the config asks
    /// for it.
    pub fn engine(&self) -> FixtureDifficultyEngine {
        let engine = FixtureDifficultyEngine::from_config(&self.config);
        match self.config.cache_capacity {
            Some(capacity) => engine.with_cache(capacity, self.fingerprint),
            None => engine,
        }
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Short name for display, falling back to the numeric id.
    pub fn short_name(&self, id: TeamId) -> String {
        self.team(id)
            .map(|t| t.short_name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Find a team by id, short name or full name (case-insensitive).
    pub fn find_team(&self, query: &str) -> Option<&Team> {
        let query = query.trim();
        if let Ok(id) = query.parse::<TeamId>() {
            return self.team(id);
        }
        self.teams.iter().find(|t| {
            t.short_name.eq_ignore_ascii_case(query) || t.name.eq_ignore_ascii_case(query)
        })
    }
}

/// Pretty JSON for `--json` output.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Truncate a name to a fixed column width.
pub fn clip(name: &str, width: usize) -> String {
    name.chars().take(width).collect()
}
