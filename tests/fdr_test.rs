//! Integration tests for fixture difficulty scoring and ranking

use fpl_form::{
    fdr::{fallback_difficulty, FallbackParams},
    rank_upcoming_fixtures, score_fixture, DataSource, Gameweek, SnapshotSource, Team, TeamFormProvider,
    TeamId, TeamStrength, Venue,
};
use std::path::Path;

fn snapshot() -> SnapshotSource {
    SnapshotSource::from_path(Path::new("tests/data/snapshot.json")).unwrap()
}

#[test]
fn test_home_fixture_against_strong_away_side() {
    let mut strength = TeamStrength::uniform(1100);
    strength.overall_home = 1200;
    let team = Team::new(TeamId::new(1), "Home Side", "HOM", strength);
    let opponent = Team::new(TeamId::new(2), "Visitors", "VIS", TeamStrength::uniform(1300));

    // 1300 / 1000 * 5 * 0.4 - 0.5
    assert_eq!(score_fixture(&team, &opponent, Venue::Home, None), 2.1);
    assert_eq!(score_fixture(&team, &opponent, Venue::Away, None), 3.1);
}

#[test]
fn test_fallback_for_unpublished_fixture() {
    let opponent = Team::new(TeamId::new(2), "Visitors", "VIS", TeamStrength::uniform(1200));
    let params = FallbackParams::default();

    assert_eq!(fallback_difficulty(&opponent, Venue::Home, &params), 2.55);
    assert_eq!(fallback_difficulty(&opponent, Venue::Away, &params), 3.45);
}

#[test]
fn test_rank_snapshot_without_form() {
    let source = snapshot();
    let teams = source.list_teams().unwrap();
    let fixtures = source.list_fixtures().unwrap();
    let current = source.current_gameweek().unwrap();

    let outlook = rank_upcoming_fixtures(&teams, &fixtures, current, 3, None).unwrap();
    assert_eq!(outlook.first_gameweek, Gameweek::new(4));
    assert_eq!(outlook.last_gameweek, Gameweek::new(6));

    let order: Vec<&str> = outlook.teams.iter().map(|t| t.short_name.as_str()).collect();
    assert_eq!(order, vec!["LIV", "MCI", "ARS", "CHE"]);

    let avgs: Vec<f64> = outlook.teams.iter().map(|t| t.avg_difficulty).collect();
    assert_eq!(avgs, vec![2.31, 2.37, 2.69, 2.75]);

    let ars = &outlook.teams[2];
    assert_eq!(ars.difficulty_scores(), vec![2.9, 3.2, 1.96]);
    assert_eq!(ars.fixtures[0].label(), "CHE (A)");
}

#[test]
fn test_rank_snapshot_with_derived_form() {
    let source = snapshot();
    let teams = source.list_teams().unwrap();
    let fixtures = source.list_fixtures().unwrap();
    let form = source.team_form().unwrap();
    assert!(form.is_some());

    let outlook =
        rank_upcoming_fixtures(&teams, &fixtures, Gameweek::new(4), 3, form.as_ref()).unwrap();
    assert_eq!(outlook.teams.len(), 4);
    for pair in outlook.teams.windows(2) {
        assert!(pair[0].avg_difficulty <= pair[1].avg_difficulty);
    }
    for team in &outlook.teams {
        assert!(team
            .difficulty_scores()
            .iter()
            .all(|s| (1.0..=5.0).contains(s)));
    }
}

#[test]
fn test_rank_past_the_season_is_empty() {
    let source = snapshot();
    let teams = source.list_teams().unwrap();
    let fixtures = source.list_fixtures().unwrap();

    let outlook = rank_upcoming_fixtures(&teams, &fixtures, Gameweek::new(30), 5, None).unwrap();
    assert!(outlook.teams.is_empty());
}
