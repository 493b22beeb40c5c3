//! Error types for the player form and fixture difficulty toolkit

use crate::cli::types::{Gameweek, PlayerId, TeamId};
use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, FormError>;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse identifier: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Negative minutes ({minutes}) for player {player_id} in round {round}")]
    NegativeMinutes {
        player_id: PlayerId,
        round: Gameweek,
        minutes: i64,
    },

    #[error("Invalid minutes ({minutes}) for player {player_id} in round {round}")]
    InvalidMinutes {
        player_id: PlayerId,
        round: Gameweek,
        minutes: f64,
    },

    #[error("Invalid position: {value}")]
    InvalidPosition { value: String },

    #[error("Invalid venue flag: {value}")]
    InvalidVenue { value: String },

    #[error("Rolling window size must be a positive integer")]
    InvalidWindow,

    #[error("Rounds out of order for player {player_id}: round {current} follows round {previous}")]
    UnorderedRounds {
        player_id: PlayerId,
        previous: Gameweek,
        current: Gameweek,
    },

    #[error("Match sequence for player {expected} contains a record for player {found}")]
    MixedPlayers { expected: PlayerId, found: PlayerId },

    #[error("Unknown team: {team_id}")]
    UnknownTeam { team_id: TeamId },

    #[error("No team matches '{query}'")]
    TeamNotFound { query: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}
