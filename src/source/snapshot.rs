//! A data source backed by one JSON snapshot file.

use super::types::{convert_records, Snapshot};
use super::{DataSource, TeamFormProvider};
use crate::cli::types::Gameweek;
use crate::error::{FormError, Result};
use crate::models::{team_form_table, Fixture, MatchRecord, Team, TeamFormTable};
use crate::team::derive_team_form;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Serves teams, fixtures and match histories from a parsed snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    snapshot: Snapshot,
    fingerprint: u64,
}

impl SnapshotSource {
    pub fn new(snapshot: Snapshot, fingerprint: u64) -> Self {
        Self {
            snapshot,
            fingerprint,
        }
    }

    /// Read and parse a snapshot file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let source: Self = contents.parse()?;
        debug!(
            path = %path.display(),
            teams = source.snapshot.teams.len(),
            fixtures = source.snapshot.fixtures.len(),
            matches = source.snapshot.matches.len(),
            "loaded snapshot"
        );
        Ok(source)
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Content hash identifying this data refresh.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }
}

impl FromStr for SnapshotSource {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(s)?;
        let mut hasher = DefaultHasher::new();
        s.hash(&mut hasher);
        Ok(Self::new(snapshot, hasher.finish()))
    }
}

impl DataSource for SnapshotSource {
    fn list_matches_for_all_players(&self) -> Result<Vec<MatchRecord>> {
        convert_records(&self.snapshot.matches)
    }

    fn list_teams(&self) -> Result<Vec<Team>> {
        Ok(self.snapshot.teams.clone())
    }

    fn list_fixtures(&self) -> Result<Vec<Fixture>> {
        Ok(self.snapshot.fixtures.clone())
    }

    fn current_gameweek(&self) -> Result<Gameweek> {
        Ok(self.snapshot.current_gameweek)
    }
}

impl TeamFormProvider for SnapshotSource {
    /// Published form rows when the snapshot carries them, otherwise form
    /// derived from finished fixtures, otherwise none.
    fn team_form(&self) -> Result<Option<TeamFormTable>> {
        if let Some(rows) = &self.snapshot.team_form {
            return Ok(Some(team_form_table(rows.iter().cloned())));
        }
        let derived = derive_team_form(&self.snapshot.teams, &self.snapshot.fixtures);
        if derived.is_empty() {
            Ok(None)
        } else {
            Ok(Some(derived))
        }
    }
}
