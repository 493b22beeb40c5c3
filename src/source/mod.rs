//! Where match records, teams and fixtures come from.
//!
//! The analysis core never performs I/O itself; callers hand it data pulled
//! through these traits.

pub mod snapshot;
pub mod types;


pub use snapshot::SnapshotSource;
pub use types::{convert_records, RawMatchRecord, RawPosition, RawVenue, Snapshot};

use crate::cli::types::Gameweek;
use crate::models::{Fixture, MatchRecord, Team, TeamFormTable};
use crate::Result;

/// Trait for providers of season data
pub trait DataSource {
    /// Every player's match history, validated into domain records
    fn list_matches_for_all_players(&self) -> Result<Vec<MatchRecord>>;

    /// All teams with their strength ratings
    fn list_teams(&self) -> Result<Vec<Team>>;

    /// The full fixture list, played and unplayed
    fn list_fixtures(&self) -> Result<Vec<Fixture>>;

    /// Gameweek in progress or next to be played
    fn current_gameweek(&self) -> Result<Gameweek>;
}

/// Trait for providers of the optional team-form table
pub trait TeamFormProvider {
    /// `None` when no team form is available; scoring then ignores form.
    fn team_form(&self) -> Result<Option<TeamFormTable>>;
}
