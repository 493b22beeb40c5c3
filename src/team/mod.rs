//! Team-level views: recent scoring form and expected-goals totals.

pub mod form;
pub mod xg;


pub use form::{derive_team_form, latest_finished_gameweek, TEAM_FORM_GAMEWEEKS};
pub use xg::{aggregate_team_xg, TeamXgSplit, TeamXgSummary};
