//! Integration tests for player form features over a snapshot

use fpl_form::{
    compute_player_features, compute_rolling,
    form::{FormStatus, FormThresholds, DEFAULT_WINDOWS},
    DataSource, FormError, Gameweek, MatchRecord, PlayerId, SnapshotSource, TeamId, Venue,
};
use std::path::Path;

fn snapshot() -> SnapshotSource {
    SnapshotSource::from_path(Path::new("tests/data/snapshot.json")).unwrap()
}

fn record(player: u64, round: u16, minutes: u32, points: f64) -> MatchRecord {
    let mut r = MatchRecord::new(
        PlayerId::new(player),
        TeamId::new(1),
        TeamId::new(2),
        Venue::Home,
        Gameweek::new(round),
        minutes,
    );
    r.points = points;
    r
}

#[test]
fn test_rolling_window_example() {
    let records = vec![record(1, 1, 90, 5.0), record(1, 2, 90, 2.0), record(1, 3, 0, 0.0)];
    let rows = compute_rolling(&records, &[3]).unwrap();

    let last = rows[2].window(3).unwrap();
    assert_eq!(last.totals.points, 7.0);
    assert_eq!(last.minutes(), 180);
    assert_eq!(last.per90.points, 3.5);
}

#[test]
fn test_zero_minute_window_has_zero_rates() {
    let records = vec![record(1, 1, 0, 0.0), record(1, 2, 0, 1.0)];
    let rows = compute_rolling(&records, &[3]).unwrap();

    let last = rows[1].window(3).unwrap();
    assert_eq!(last.minutes(), 0);
    assert_eq!(last.per90.points, 0.0);
}

#[test]
fn test_hot_form_example() {
    // Season 4.0 per 90, last five 5.5 per 90 over 300 minutes
    let thresholds = FormThresholds::default();
    assert_eq!(thresholds.classify(5.5 - 4.0, 300), FormStatus::Hot);
    assert_eq!(thresholds.classify(5.5 - 4.0, 269), FormStatus::Steady);
    assert_eq!(thresholds.classify(-1.5, 300), FormStatus::Cold);
}

#[test]
fn test_features_from_snapshot() {
    let source = snapshot();
    let records = source.list_matches_for_all_players().unwrap();
    let features = compute_player_features(&records, &DEFAULT_WINDOWS).unwrap();

    assert_eq!(features.season.len(), 4);
    assert_eq!(features.rolling.len(), 12);

    let saka = features.season_for(PlayerId::new(10)).unwrap();
    assert_eq!(saka.player_name, "Saka");
    assert_eq!(saka.fixtures_played, 3);
    assert_eq!(saka.totals.points, 20.0);
    assert_eq!(saka.totals.minutes, 265);
    assert_eq!(saka.home.totals.points, 12.0);
    assert_eq!(saka.away.totals.points, 8.0);
    assert_eq!(saka.home.games(), 2);

    let rounds: Vec<Gameweek> = features
        .rolling_for(PlayerId::new(40))
        .map(|r| r.round)
        .collect();
    assert_eq!(rounds, vec![Gameweek::new(1), Gameweek::new(2), Gameweek::new(3)]);

    let haaland = features.season_for(PlayerId::new(40)).unwrap();
    assert_eq!(haaland.recent_minutes(), 225);
}

#[test]
fn test_out_of_order_rounds_rejected() {
    let records = vec![record(1, 2, 90, 1.0), record(1, 1, 90, 1.0)];
    assert!(matches!(
        compute_rolling(&records, &[3]),
        Err(FormError::UnorderedRounds { .. })
    ));
}

#[test]
fn test_empty_window_list_rejected() {
    let records = vec![record(1, 1, 90, 1.0)];
    assert!(matches!(
        compute_rolling(&records, &[]),
        Err(FormError::InvalidWindow)
    ));
}
