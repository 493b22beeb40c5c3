//! File helpers and the in-memory difficulty memo.
//!
//! Two concerns live here:
//! - small file-system helpers for writing the configuration file
//! - an LRU memo of fixture difficulty scores, keyed by everything a score
//!   depends on within one data snapshot

use crate::cli::types::{TeamId, Venue};
use crate::models::{TeamForm, TeamFormTable};
use lru::LruCache;
use std::{
    collections::hash_map::DefaultHasher,
    fs,
    hash::{Hash, Hasher},
    io::Write,
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::Mutex,
};

/// Directory name used under the platform config directory.
pub const APP_DIR: &str = "fpl-form";

/// Path: <config dir>/fpl-form/config.json
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join(APP_DIR).join("config.json")
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Everything a model difficulty score depends on.
///
/// `snapshot` identifies the data refresh the strengths came from. `form` is
/// `None` when scoring without a form table, otherwise the
/// [`form_fingerprint`] of the two teams' rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DifficultyKey {
    pub team: TeamId,
    pub opponent: TeamId,
    pub venue: Venue,
    pub snapshot: u64,
    pub form: Option<u64>,
}

/// Hash of the form rows `teams` have in `table`.
///
/// A team with no row hashes differently from any team with one.
pub fn form_fingerprint(table: &TeamFormTable, teams: &[TeamId]) -> u64 {
    let mut hasher = DefaultHasher::new();
    for id in teams {
        id.hash(&mut hasher);
        match table.get(id) {
            Some(row) => {
                true.hash(&mut hasher);
                hash_form_row(row, &mut hasher);
            }
            None => false.hash(&mut hasher),
        }
    }
    hasher.finish()
}

fn hash_form_row(row: &TeamForm, hasher: &mut DefaultHasher) {
    row.games_played.hash(hasher);
    for value in [
        row.goals_per_game,
        row.goals_conceded_per_game,
        row.clean_sheet_percentage,
    ] {
        value.map(f64::to_bits).hash(hasher);
    }
}

/// Bounded memo of difficulty scores.
pub struct DifficultyCache {
    memory: Mutex<LruCache<DifficultyKey, f64>>,
    capacity: usize,
}

impl DifficultyCache {
    /// Create a memo holding at most `capacity` scores (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            memory: Mutex::new(LruCache::new(capacity)),
            capacity: capacity.get(),
        }
    }

    /// Cached score for `key`, computing and storing it on a miss.
    pub fn get_or_insert_with(&self, key: DifficultyKey, compute: impl FnOnce() -> f64) -> f64 {
        let Ok(mut memory) = self.memory.lock() else {
            return compute();
        };
        if let Some(score) = memory.get(&key) {
            return *score;
        }
        let score = compute();
        memory.put(key, score);
        score
    }

    pub fn get(&self, key: &DifficultyKey) -> Option<f64> {
        self.memory.lock().ok()?.get(key).copied()
    }

    pub fn clear(&self) {
        if let Ok(mut memory) = self.memory.lock() {
            memory.clear();
        }
    }

    /// (entries, capacity)
    pub fn stats(&self) -> (usize, usize) {
        let len = self.memory.lock().map(|m| m.len()).unwrap_or(0);
        (len, self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tempfile::tempdir;

    fn key(team: u32, opponent: u32, venue: Venue) -> DifficultyKey {
        DifficultyKey {
            team: TeamId::new(team),
            opponent: TeamId::new(opponent),
            venue,
            snapshot: 1,
            form: None,
        }
    }

    fn form(team: u32, goals_per_game: f64) -> TeamForm {
        TeamForm {
            team: TeamId::new(team),
            games_played: 6,
            goals_per_game: Some(goals_per_game),
            goals_conceded_per_game: Some(1.0),
            clean_sheet_percentage: None,
        }
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        write_string(&path, "{\"horizon\": 6}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"horizon\": 6}");
    }

    #[test]
    fn test_form_fingerprint_tracks_the_two_rows() {
        let pair = [TeamId::new(1), TeamId::new(2)];
        let table = crate::models::team_form_table([form(1, 2.0), form(2, 1.0)]);
        let changed = crate::models::team_form_table([form(1, 2.5), form(2, 1.0)]);
        let unrelated =
            crate::models::team_form_table([form(1, 2.0), form(2, 1.0), form(3, 0.2)]);
        let missing = crate::models::team_form_table([form(1, 2.0)]);

        let base = form_fingerprint(&table, &pair);
        assert_eq!(base, form_fingerprint(&table, &pair));
        assert_ne!(base, form_fingerprint(&changed, &pair));
        assert_eq!(base, form_fingerprint(&unrelated, &pair));
        assert_ne!(base, form_fingerprint(&missing, &pair));
        assert_ne!(base, form_fingerprint(&table, &[TeamId::new(2), TeamId::new(1)]));
    }

    #[test]
    fn test_default_config_path_ends_with_app_dir() {
        let path = default_config_path();
        assert!(path.ends_with(Path::new(APP_DIR).join("config.json")));
    }

    #[test]
    fn test_cache_computes_once_per_key() {
        let cache = DifficultyCache::new(8);
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            2.75
        };

        assert_eq!(cache.get_or_insert_with(key(1, 2, Venue::Home), compute), 2.75);
        assert_eq!(cache.get_or_insert_with(key(1, 2, Venue::Home), compute), 2.75);
        assert_eq!(calls.get(), 1);

        cache.get_or_insert_with(key(1, 2, Venue::Away), compute);
        assert_eq!(calls.get(), 2);
        assert_eq!(cache.stats(), (2, 8));
    }

    #[test]
    fn test_cache_evicts_least_recently_used() {
        let cache = DifficultyCache::new(2);
        cache.get_or_insert_with(key(1, 2, Venue::Home), || 1.0);
        cache.get_or_insert_with(key(1, 3, Venue::Home), || 2.0);
        cache.get_or_insert_with(key(1, 4, Venue::Home), || 3.0);

        assert!(cache.get(&key(1, 2, Venue::Home)).is_none());
        assert_eq!(cache.get(&key(1, 4, Venue::Home)), Some(3.0));
    }

    #[test]
    fn test_zero_capacity_still_caches_one_entry() {
        let cache = DifficultyCache::new(0);
        cache.get_or_insert_with(key(5, 6, Venue::Away), || 4.2);
        assert_eq!(cache.stats(), (1, 1));

        cache.clear();
        assert_eq!(cache.stats(), (0, 1));
    }
}
