//! Player positions as the game classifies them.

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fantasy Premier League squad positions.
///
/// The provider numbers them 1 to 4 (`element_type`) and abbreviates them
/// GKP, DEF, MID and FWD.
///
/// # Examples
///
/// ```rust
/// use fpl_form::Position;
///
/// let pos: Position = "Midfielder".parse().unwrap();
/// assert_eq!(pos, Position::MID);
/// assert_eq!(Position::try_from(4i64).unwrap(), Position::FWD);
/// assert_eq!(pos.to_string(), "MID");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Position {
    GKP,
    DEF,
    MID,
    FWD,
}

impl Position {
    pub const ALL: [Position; 4] = [Position::GKP, Position::DEF, Position::MID, Position::FWD];

    /// The provider's `element_type` number.
    pub fn element_type(&self) -> u8 {
        match self {
            Position::GKP => 1,
            Position::DEF => 2,
            Position::MID => 3,
            Position::FWD => 4,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::GKP => "GKP",
            Position::DEF => "DEF",
            Position::MID => "MID",
            Position::FWD => "FWD",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GKP" | "GK" | "GOALKEEPER" | "1" => Ok(Position::GKP),
            "DEF" | "DEFENDER" | "2" => Ok(Position::DEF),
            "MID" | "MIDFIELDER" | "3" => Ok(Position::MID),
            "FWD" | "FW" | "FORWARD" | "4" => Ok(Position::FWD),
            _ => Err(FormError::InvalidPosition {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<i64> for Position {
    type Error = FormError;

    fn try_from(element_type: i64) -> Result<Self, Self::Error> {
        match element_type {
            1 => Ok(Position::GKP),
            2 => Ok(Position::DEF),
            3 => Ok(Position::MID),
            4 => Ok(Position::FWD),
            other => Err(FormError::InvalidPosition {
                value: other.to_string(),
            }),
        }
    }
}
