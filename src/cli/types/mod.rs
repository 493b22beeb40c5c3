//! Type-safe wrappers and enums shared by the library and the CLI.

pub mod ids;
pub mod position;
pub mod time;
pub mod venue;

pub use ids::{PlayerId, TeamId};
pub use position::Position;
pub use time::Gameweek;
pub use venue::Venue;
