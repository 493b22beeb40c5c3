//! Team scoring form from recent finished fixtures.

use crate::cli::types::Gameweek;
use crate::fdr::score::round2;
use crate::models::{Fixture, Team, TeamForm, TeamFormTable};
use tracing::debug;

/// Gameweeks counted back from the latest finished one, inclusive of it.
pub const TEAM_FORM_GAMEWEEKS: u16 = 6;

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Latest gameweek with a finished fixture.
pub fn latest_finished_gameweek(fixtures: &[Fixture]) -> Option<Gameweek> {
    fixtures
        .iter()
        .filter(|f| f.finished)
        .filter_map(|f| f.gameweek)
        .max()
}

/// Goals for and against per game, plus clean-sheet percentage, for every
/// team in `teams` that played a finished fixture in the last
/// [`TEAM_FORM_GAMEWEEKS`] gameweeks.
///
/// A finished fixture with a missing score counts that side as zero goals.
pub fn derive_team_form(teams: &[Team], fixtures: &[Fixture]) -> TeamFormTable {
    let mut table = TeamFormTable::new();
    let Some(latest) = latest_finished_gameweek(fixtures) else {
        debug!("no finished fixtures; team form table is empty");
        return table;
    };
    let earliest = Gameweek::new(
        latest
            .as_u16()
            .saturating_sub(TEAM_FORM_GAMEWEEKS - 1)
            .max(1),
    );

    let recent: Vec<&Fixture> = fixtures
        .iter()
        .filter(|f| f.finished)
        .filter(|f| matches!(f.gameweek, Some(gw) if gw >= earliest && gw <= latest))
        .collect();
    debug!(
        from = earliest.as_u16(),
        to = latest.as_u16(),
        fixtures = recent.len(),
        "deriving team form"
    );

    for team in teams {
        let mut games = 0u32;
        let mut scored = 0u32;
        let mut conceded = 0u32;
        let mut clean_sheets = 0u32;

        for fixture in recent.iter().filter(|f| f.involves(team.id)) {
            let home = fixture.team_h_score.unwrap_or(0);
            let away = fixture.team_a_score.unwrap_or(0);
            let (goals_for, goals_against) = if fixture.team_h == team.id {
                (home, away)
            } else {
                (away, home)
            };
            games += 1;
            scored += goals_for;
            conceded += goals_against;
            if goals_against == 0 {
                clean_sheets += 1;
            }
        }

        if games == 0 {
            continue;
        }
        let games_f = games as f64;
        table.insert(
            team.id,
            TeamForm {
                team: team.id,
                games_played: games,
                goals_per_game: Some(round2(scored as f64 / games_f)),
                goals_conceded_per_game: Some(round2(conceded as f64 / games_f)),
                clean_sheet_percentage: Some(round1(clean_sheets as f64 / games_f * 100.0)),
            },
        );
    }

    table
}
