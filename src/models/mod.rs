//! Domain models consumed by the form aggregator and the difficulty engine.

pub mod fixture;
pub mod match_record;
pub mod team;

pub use fixture::Fixture;
pub use match_record::{MatchRecord, MAX_MATCH_MINUTES};
pub use team::{team_form_table, Team, TeamForm, TeamFormTable, TeamStrength};
