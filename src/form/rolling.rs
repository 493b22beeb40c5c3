//! Trailing-window sums and per-90 rates over one player's match sequence.

use super::stats::{Per90Rates, Stat, StatLine};
use crate::cli::types::{Gameweek, PlayerId, TeamId, Venue};
use crate::error::{FormError, Result};
use crate::models::MatchRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Window sizes used when the caller has no preference.
pub const DEFAULT_WINDOWS: [usize; 3] = [3, 5, 10];

/// Sums over the trailing `window` matches ending at one record.
///
/// Partial windows at the start of a sequence simply cover fewer matches;
/// `totals.matches` tells how many were actually available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingWindowFeature {
    pub window: usize,
    pub totals: StatLine,
    pub per90: Per90Rates,
}

impl RollingWindowFeature {
    fn new(window: usize, totals: StatLine) -> Self {
        Self {
            window,
            per90: totals.per90_rates(),
            totals,
        }
    }

    pub fn minutes(&self) -> u32 {
        self.totals.minutes
    }

    pub fn per90_of(&self, stat: Stat) -> f64 {
        self.totals.per90(stat)
    }
}

/// Rolling features for one match of one player, one entry per window size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingRow {
    pub player_id: PlayerId,
    pub round: Gameweek,
    pub team: TeamId,
    pub opponent: TeamId,
    pub venue: Venue,
    pub windows: Vec<RollingWindowFeature>,
}

impl RollingRow {
    pub fn window(&self, size: usize) -> Option<&RollingWindowFeature> {
        self.windows.iter().find(|w| w.window == size)
    }
}

/// Check that `records` is one player's matches in non-decreasing round order.
pub fn validate_sequence(records: &[MatchRecord]) -> Result<()> {
    let Some(first) = records.first() else {
        return Ok(());
    };

    for pair in records.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        if current.player_id != first.player_id {
            return Err(FormError::MixedPlayers {
                expected: first.player_id,
                found: current.player_id,
            });
        }
        if current.round < previous.round {
            return Err(FormError::UnorderedRounds {
                player_id: first.player_id,
                previous: previous.round,
                current: current.round,
            });
        }
    }
    Ok(())
}

/// Normalise a caller-supplied set of window sizes: sorted, deduplicated,
/// and rejected if empty or containing zero.
pub fn normalize_windows(windows: &[usize]) -> Result<Vec<usize>> {
    let set: BTreeSet<usize> = windows.iter().copied().collect();
    if set.is_empty() || set.contains(&0) {
        return Err(FormError::InvalidWindow);
    }
    Ok(set.into_iter().collect())
}

/// Window of size `window` ending at (and including) index `end`.
///
/// # Panics
///
/// Panics if `end` is out of bounds for `records`.
pub fn trailing_window(records: &[MatchRecord], end: usize, window: usize) -> RollingWindowFeature {
    let start = (end + 1).saturating_sub(window);
    RollingWindowFeature::new(window, StatLine::from_records(&records[start..=end]))
}

/// The window ending at the most recent match, or an empty one for a player
/// with no matches.
pub fn latest_window(records: &[MatchRecord], window: usize) -> RollingWindowFeature {
    match records.len() {
        0 => RollingWindowFeature::new(window, StatLine::default()),
        n => trailing_window(records, n - 1, window),
    }
}

/// Rolling features at every position of one player's match sequence.
///
/// Each row only looks backwards, so appending a new match never changes
/// rows already produced for earlier rounds.
///
/// # Examples
///
/// ```rust
/// use fpl_form::{compute_rolling, Gameweek, MatchRecord, PlayerId, TeamId, Venue};
///
/// let mut records = Vec::new();
/// for (round, (minutes, points)) in [(90, 5.0), (90, 2.0), (0, 0.0)].into_iter().enumerate() {
///     let mut r = MatchRecord::new(
///         PlayerId::new(1),
///         TeamId::new(1),
///         TeamId::new(2),
///         Venue::Home,
///         Gameweek::new(round as u16 + 1),
///         minutes,
///     );
///     r.points = points;
///     records.push(r);
/// }
///
/// let rows = compute_rolling(&records, &[3]).unwrap();
/// let last = rows[2].window(3).unwrap();
/// assert_eq!(last.totals.points, 7.0);
/// assert_eq!(last.minutes(), 180);
/// assert_eq!(last.per90.points, 3.5);
/// ```
pub fn compute_rolling(records: &[MatchRecord], windows: &[usize]) -> Result<Vec<RollingRow>> {
    let windows = normalize_windows(windows)?;
    validate_sequence(records)?;

    let rows = records
        .iter()
        .enumerate()
        .map(|(i, record)| RollingRow {
            player_id: record.player_id,
            round: record.round,
            team: record.team,
            opponent: record.opponent,
            venue: record.venue,
            windows: windows
                .iter()
                .map(|&w| trailing_window(records, i, w))
                .collect(),
        })
        .collect();

    Ok(rows)
}
