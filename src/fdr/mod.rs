//! Fixture difficulty engine.
//!
//! - `score`: the weighted per-fixture model and the strength-only fallback
//! - `schedule`: picking the first full gameweek and the upcoming window
//! - `engine`: a configured scorer with an optional memo
//! - `rank`: ranking teams by their upcoming run

pub mod engine;
pub mod rank;
pub mod schedule;
pub mod score;


pub use engine::FixtureDifficultyEngine;
pub use rank::{
    rank_upcoming_fixtures, DetailedFixture, FixtureOutlook, FixtureRun, ScheduleParams,
    ScoredFixture, TeamOutlook,
};
pub use schedule::{
    first_full_gameweek, teams_with_unfinished, upcoming_window, DEFAULT_FULL_GAMEWEEK_RATIO,
    DEFAULT_LOOKAHEAD,
};
pub use score::{
    difficulty_breakdown, fallback_difficulty, opponent_strength, published_or_fallback,
    score_fixture, score_fixture_with, DifficultyBand, DifficultyBreakdown, DifficultyMode,
    FallbackParams, FdrWeights, MAX_DIFFICULTY, MIN_DIFFICULTY,
};
