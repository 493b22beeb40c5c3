//! Selecting the upcoming fixtures a ranking should cover.

use crate::cli::types::{Gameweek, TeamId};
use crate::models::Fixture;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use tracing::debug;

/// Share of teams that must still have an unfinished fixture in a gameweek
/// for it to count as a full gameweek.
pub const DEFAULT_FULL_GAMEWEEK_RATIO: f64 = 0.75;

/// How many gameweeks past the current one to search for a full gameweek.
pub const DEFAULT_LOOKAHEAD: u16 = 10;

/// Teams with at least one unfinished fixture in `gameweek`.
pub fn teams_with_unfinished(fixtures: &[Fixture], gameweek: Gameweek) -> BTreeSet<TeamId> {
    fixtures
        .iter()
        .filter(|f| !f.finished && f.gameweek == Some(gameweek))
        .flat_map(|f| [f.team_h, f.team_a])
        .collect()
}

/// First gameweek in `[current, current + lookahead)` where at least
/// `ratio` of all teams still have an unfinished fixture.
///
/// Skips gameweeks that are mostly played already, which would otherwise
/// average over a handful of teams. Falls back to `current` when no
/// gameweek qualifies.
pub fn first_full_gameweek(
    fixtures: &[Fixture],
    team_count: usize,
    current: Gameweek,
    ratio: f64,
    lookahead: u16,
) -> Gameweek {
    let required = team_count as f64 * ratio;
    for step in 0..lookahead {
        let gameweek = current.offset(step);
        let playing = teams_with_unfinished(fixtures, gameweek).len();
        if playing as f64 >= required {
            debug!(
                gameweek = gameweek.as_u16(),
                playing, team_count, "first full gameweek"
            );
            return gameweek;
        }
    }
    current
}

/// Chronological order: gameweek, then kickoff time, with fixtures whose
/// kickoff is not yet set after the scheduled ones of the same gameweek.
pub(crate) fn chronological(a: &Fixture, b: &Fixture) -> Ordering {
    a.gameweek.cmp(&b.gameweek).then_with(|| match (&a.kickoff_time, &b.kickoff_time) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    })
}

/// Unfinished fixtures with a gameweek in `[first, first + horizon)`, in
/// chronological order.
pub fn upcoming_window(fixtures: &[Fixture], first: Gameweek, horizon: u16) -> Vec<&Fixture> {
    let end = first.offset(horizon);
    let mut window: Vec<&Fixture> = fixtures
        .iter()
        .filter(|f| !f.finished)
        .filter(|f| matches!(f.gameweek, Some(gw) if gw >= first && gw < end))
        .collect();
    window.sort_by(|a, b| chronological(a, b));
    window
}
