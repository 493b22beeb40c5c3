//! Fantasy Premier League form and fixture difficulty library
//!
//! Turns per-player match histories into rolling form features and rates
//! upcoming fixtures for each team on a 1 to 5 difficulty scale.
//!
//! ## Features
//!
//! - **Rolling Form**: trailing 3/5/10-match totals and per-90 rates, computed
//!   point-in-time so each row only sees earlier matches
//! - **Season Aggregates**: totals, home/away splits, non-penalty xG estimates
//!   and form trends with hot/cold flags
//! - **Fixture Difficulty**: a weighted strength + venue + team-form model, or
//!   provider-published difficulty with a strength-only fallback
//! - **Schedule Ranking**: teams ordered by the average difficulty of their
//!   next fixtures, starting at the first full gameweek
//! - **Team Views**: recent goals for/against form and team xG totals
//!
//! ## Quick Start
//!
//! ```rust
//! use fpl_form::{compute_rolling, Gameweek, MatchRecord, PlayerId, TeamId, Venue};
//!
//! # fn example() -> fpl_form::Result<()> {
//! let player = PlayerId::new(7);
//! let records: Vec<MatchRecord> = [(1, 90, 5.0), (2, 90, 2.0), (3, 0, 0.0)]
//!     .into_iter()
//!     .map(|(round, minutes, points)| {
//!         let mut r = MatchRecord::new(
//!             player,
//!             TeamId::new(1),
//!             TeamId::new(2),
//!             Venue::Home,
//!             Gameweek::new(round),
//!             minutes,
//!         );
//!         r.points = points;
//!         r
//!     })
//!     .collect();
//!
//! let rows = compute_rolling(&records, &[3])?;
//! assert_eq!(rows[2].window(3).unwrap().per90.points, 3.5);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a config file to avoid passing `--config` every time:
//! ```bash
//! export FPL_FORM_CONFIG=~/fpl/config.json
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod fdr;
pub mod form;
pub mod models;
pub mod source;
pub mod team;

// Re-export commonly used types
pub use cli::types::{Gameweek, PlayerId, Position, TeamId, Venue};
pub use config::{AnalysisConfig, CONFIG_ENV_VAR};
pub use error::{FormError, Result};
pub use fdr::{rank_upcoming_fixtures, score_fixture, FixtureDifficultyEngine, FixtureOutlook};
pub use form::{aggregate_season, compute_player_features, compute_rolling, PlayerFeatures};
pub use models::{Fixture, MatchRecord, Team, TeamForm, TeamFormTable, TeamStrength};
pub use source::{DataSource, SnapshotSource, TeamFormProvider};
