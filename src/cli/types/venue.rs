//! Match venue from the point of view of the team being analysed.

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a team plays at its own ground or at the opponent's.
///
/// # Examples
///
/// ```rust
/// use fpl_form::Venue;
///
/// let venue: Venue = "A".parse().unwrap();
/// assert_eq!(venue, Venue::Away);
/// assert_eq!(venue.opposite(), Venue::Home);
/// assert_eq!(Venue::Home.short_label(), "H");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Venue {
    Home,
    Away,
}

impl Venue {
    pub fn from_home_flag(was_home: bool) -> Self {
        if was_home {
            Venue::Home
        } else {
            Venue::Away
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Venue::Home)
    }

    /// The venue the other side of the same fixture occupies.
    pub fn opposite(&self) -> Self {
        match self {
            Venue::Home => Venue::Away,
            Venue::Away => Venue::Home,
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            Venue::Home => "H",
            Venue::Away => "A",
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Venue::Home => "Home",
            Venue::Away => "Away",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Venue {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "H" | "HOME" | "TRUE" | "1" => Ok(Venue::Home),
            "A" | "AWAY" | "FALSE" | "0" => Ok(Venue::Away),
            _ => Err(FormError::InvalidVenue {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<i64> for Venue {
    type Error = FormError;

    fn try_from(flag: i64) -> Result<Self, Self::Error> {
        match flag {
            1 => Ok(Venue::Home),
            0 => Ok(Venue::Away),
            other => Err(FormError::InvalidVenue {
                value: other.to_string(),
            }),
        }
    }
}
