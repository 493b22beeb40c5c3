//! Unit tests for the rolling form aggregator

use super::*;
use crate::cli::types::{Gameweek, Position, TeamId, Venue};
use crate::error::FormError;

fn record(player: u64, round: u16, venue: Venue, minutes: u32, points: f64) -> MatchRecord {
    let mut r = MatchRecord::new(
        PlayerId::new(player),
        TeamId::new(1),
        TeamId::new(round as u32 % 19 + 2),
        venue,
        Gameweek::new(round),
        minutes,
    );
    r.player_name = format!("Player {}", player);
    r.points = points;
    r
}

fn sequence(player: u64, minutes: &[u32], points: &[f64]) -> Vec<MatchRecord> {
    minutes
        .iter()
        .zip(points)
        .enumerate()
        .map(|(i, (&m, &p))| {
            let venue = if i % 2 == 0 { Venue::Home } else { Venue::Away };
            record(player, i as u16 + 1, venue, m, p)
        })
        .collect()
}

#[cfg(test)]
mod rolling_tests {
    use super::*;

    #[test]
    fn test_three_match_window_example() {
        let records = sequence(1, &[90, 90, 0], &[5.0, 2.0, 0.0]);
        let rows = compute_rolling(&records, &[3]).unwrap();

        assert_eq!(rows.len(), 3);
        let last = rows[2].window(3).unwrap();
        assert_eq!(last.totals.points, 7.0);
        assert_eq!(last.minutes(), 180);
        assert_eq!(last.per90.points, 3.5);
    }

    #[test]
    fn test_partial_windows_are_not_zero_padded() {
        let records = sequence(1, &[90, 45, 90, 90], &[6.0, 1.0, 2.0, 3.0]);
        let rows = compute_rolling(&records, &[3, 5]).unwrap();

        let first = rows[0].window(5).unwrap();
        assert_eq!(first.totals.matches, 1);
        assert_eq!(first.totals.points, 6.0);
        assert_eq!(first.per90.points, 6.0);

        let fourth = rows[3].window(3).unwrap();
        assert_eq!(fourth.totals.matches, 3);
        assert_eq!(fourth.totals.points, 6.0);
        assert_eq!(fourth.minutes(), 225);
    }

    #[test]
    fn test_per90_is_zero_without_minutes() {
        let mut records = sequence(1, &[0, 0], &[0.0, 1.0]);
        records[1].xg = 0.4;
        let rows = compute_rolling(&records, &[3]).unwrap();

        let window = rows[1].window(3).unwrap();
        assert_eq!(window.minutes(), 0);
        assert_eq!(window.totals.points, 1.0);
        assert_eq!(window.per90.points, 0.0);
        assert_eq!(window.per90.xg, 0.0);
        assert!(window.per90.xgi.is_finite());
    }

    #[test]
    fn test_windows_are_sorted_and_deduplicated() {
        let records = sequence(1, &[90], &[2.0]);
        let rows = compute_rolling(&records, &[10, 3, 5, 3]).unwrap();
        let sizes: Vec<usize> = rows[0].windows.iter().map(|w| w.window).collect();
        assert_eq!(sizes, vec![3, 5, 10]);
    }

    #[test]
    fn test_zero_or_empty_window_rejected() {
        let records = sequence(1, &[90], &[2.0]);
        assert!(matches!(compute_rolling(&records, &[0, 3]), Err(FormError::InvalidWindow)));
        assert!(matches!(compute_rolling(&records, &[]), Err(FormError::InvalidWindow)));
    }

    #[test]
    fn test_mixed_players_rejected() {
        let mut records = sequence(1, &[90, 90], &[2.0, 2.0]);
        records.push(record(2, 3, Venue::Home, 90, 1.0));

        match compute_rolling(&records, &[3]) {
            Err(FormError::MixedPlayers { expected, found }) => {
                assert_eq!(expected, PlayerId::new(1));
                assert_eq!(found, PlayerId::new(2));
            }
            other => panic!("Expected MixedPlayers, got {:?}", other),
        }
    }

    #[test]
    fn test_unordered_rounds_rejected() {
        let mut records = sequence(1, &[90, 90, 90], &[2.0, 2.0, 2.0]);
        records.swap(0, 2);
        assert!(matches!(
            compute_rolling(&records, &[3]),
            Err(FormError::UnorderedRounds { .. })
        ));
    }

    #[test]
    fn test_double_gameweek_rounds_allowed() {
        let mut records = sequence(1, &[90, 90], &[2.0, 8.0]);
        records[1].round = records[0].round;
        let rows = compute_rolling(&records, &[3]).unwrap();
        assert_eq!(rows[1].window(3).unwrap().totals.points, 10.0);
    }

    #[test]
    fn test_appending_a_match_keeps_prior_rows() {
        let records = sequence(1, &[90, 60, 90, 0, 90], &[2.0, 5.0, 1.0, 0.0, 12.0]);
        let before = compute_rolling(&records[..4], &DEFAULT_WINDOWS).unwrap();
        let after = compute_rolling(&records, &DEFAULT_WINDOWS).unwrap();

        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..4], &before[..]);
    }

    #[test]
    fn test_ict_and_defensive_actions_roll_up() {
        let mut records = sequence(1, &[90, 90, 45], &[2.0, 2.0, 1.0]);
        for (r, (influence, cbi)) in records.iter_mut().zip([(20.0, 4.0), (30.0, 6.0), (10.0, 2.0)]) {
            r.influence = influence;
            r.creativity = influence / 2.0;
            r.threat = 5.0;
            r.clearances_blocks_interceptions = cbi;
            r.recoveries = 3.0;
        }

        let rows = compute_rolling(&records, &[3]).unwrap();
        let window = rows[2].window(3).unwrap();
        assert_eq!(window.totals.influence, 60.0);
        assert_eq!(window.totals.creativity, 30.0);
        assert_eq!(window.totals.threat, 15.0);
        assert_eq!(window.totals.clearances_blocks_interceptions, 12.0);
        assert_eq!(window.per90.influence, 24.0);
        assert_eq!(window.per90.recoveries, 3.6);
        assert_eq!(window.per90_of(Stat::ClearancesBlocksInterceptions), 4.8);

        let season = aggregate_season(PlayerId::new(1), &records).unwrap();
        assert_eq!(season.per90.threat, 6.0);
        assert_eq!(season.totals.recoveries, 9.0);
    }

    #[test]
    fn test_minute_totals_saturate() {
        let big = StatLine {
            matches: u32::MAX,
            minutes: u32::MAX - 10,
            ..StatLine::default()
        };
        let one = StatLine::from_record(&record(1, 1, Venue::Home, 90, 2.0));

        let sum = big + one;
        assert_eq!(sum.minutes, u32::MAX);
        assert_eq!(sum.matches, u32::MAX);
        assert!(sum.per90(Stat::Points).is_finite());
    }

    #[test]
    fn test_derived_ratios_match_at_window_and_season() {
        let mut records = sequence(1, &[90, 90], &[8.0, 2.0]);
        records[0].goals = 1.0;
        records[0].xg = 0.3;
        records[1].assists = 1.0;
        records[1].xa = 0.6;

        let rows = compute_rolling(&records, &[10]).unwrap();
        let window = rows[1].window(10).unwrap();
        let season = aggregate_season(PlayerId::new(1), &records).unwrap();

        assert_eq!(window.totals.goal_involvements(), 2.0);
        assert_eq!(season.goal_involvements(), 2.0);
        assert_eq!(window.totals.xg_overperformance(), season.xg_overperformance());
        assert_eq!(window.totals.xa_overperformance(), season.xa_overperformance());
        assert!((season.xg_overperformance() - 0.7).abs() < 1e-12);
        assert!((season.xa_overperformance() - 0.4).abs() < 1e-12);
    }
}

#[cfg(test)]
mod season_tests {
    use super::*;

    #[test]
    fn test_empty_player_yields_zero_aggregate() {
        let season = aggregate_season(PlayerId::new(5), &[]).unwrap();

        assert_eq!(season.fixtures_played, 0);
        assert_eq!(season.totals, StatLine::default());
        assert_eq!(season.per90, Per90Rates::default());
        assert_eq!(season.start_percentage, 0.0);
        assert_eq!(season.minutes_per_fixture, 0.0);
        assert_eq!(season.form_trend_points, 0.0);
        assert!(season.team.is_none());
    }

    #[test]
    fn test_season_sums_and_start_percentage() {
        let mut records = sequence(3, &[90, 90, 20, 90], &[6.0, 2.0, 1.0, 9.0]);
        for r in records.iter_mut() {
            r.starts = if r.minutes >= 60 { 1.0 } else { 0.0 };
        }

        let season = aggregate_season(PlayerId::new(3), &records).unwrap();
        assert_eq!(season.fixtures_played, 4);
        assert_eq!(season.starts, 3);
        assert_eq!(season.start_percentage, 75.0);
        assert_eq!(season.totals.minutes, 290);
        assert_eq!(season.totals.points, 18.0);
        assert_eq!(season.minutes_per_fixture, 72.5);
        assert_eq!(season.per90.points, 18.0 * 90.0 / 290.0);
        assert_eq!(season.player_name, "Player 3");
    }

    #[test]
    fn test_home_and_away_splits_filter_by_venue() {
        let records = sequence(1, &[90, 90, 90, 45], &[10.0, 2.0, 4.0, 1.0]);
        let season = aggregate_season(PlayerId::new(1), &records).unwrap();

        assert_eq!(season.home.games(), 2);
        assert_eq!(season.home.totals.points, 14.0);
        assert_eq!(season.away.games(), 2);
        assert_eq!(season.away.totals.minutes, 135);
        assert_eq!(season.split(Venue::Away).totals.points, 3.0);
        assert_eq!(season.home_away_points_diff, 7.0 - 2.0);
    }

    #[test]
    fn test_split_merge_reproduces_season_per90() {
        let mut records = sequence(1, &[90, 73, 12, 90, 0, 64], &[7.0, 3.0, 1.0, 2.0, 0.0, 6.0]);
        for (i, r) in records.iter_mut().enumerate() {
            r.xg = 0.13 * (i as f64 + 1.0);
            r.defensive_contribution = (i * 3) as f64;
        }

        let season = aggregate_season(PlayerId::new(1), &records).unwrap();
        let merged = season.home.totals + season.away.totals;
        for stat in [Stat::Points, Stat::Xg, Stat::DefensiveContribution, Stat::Npxgi] {
            assert_eq!(merged.per90(stat), season.totals.per90(stat), "stat {}", stat);
        }
    }

    #[test]
    fn test_aggregate_rejects_other_players() {
        let records = sequence(1, &[90], &[2.0]);
        assert!(matches!(
            aggregate_season(PlayerId::new(2), &records),
            Err(FormError::MixedPlayers { .. })
        ));
    }

    #[test]
    fn test_recent_window_covers_last_five() {
        let records = sequence(1, &[90; 7], &[1.0, 1.0, 2.0, 2.0, 2.0, 2.0, 2.0]);
        let season = aggregate_season(PlayerId::new(1), &records).unwrap();

        assert_eq!(season.recent.window, RECENT_WINDOW);
        assert_eq!(season.recent.totals.matches, 5);
        assert_eq!(season.recent_minutes(), 450);
        assert_eq!(season.recent.per90.points, 2.0);
        assert!((season.form_trend_points - (2.0 - 12.0 / 7.0)).abs() < 1e-12);
    }
}

#[cfg(test)]
mod trend_tests {
    use super::*;

    #[test]
    fn test_hot_form_example() {
        // Season: 40 pts in 900 min = 4.0/90. Recent: 22 pts in 360 min = 5.5/90.
        let season_line = StatLine {
            matches: 10,
            minutes: 900,
            points: 40.0,
            ..StatLine::default()
        };
        let recent_line = StatLine {
            matches: 4,
            minutes: 360,
            points: 22.0,
            ..StatLine::default()
        };
        assert_eq!(trend::trend_between(&season_line, &recent_line, Stat::Points), 1.5);

        let thresholds = FormThresholds::default();
        assert_eq!(thresholds.classify(1.5, 300), FormStatus::Hot);
        assert_eq!(thresholds.classify(1.5, 269), FormStatus::Steady);
        assert_eq!(thresholds.classify(-1.5, 300), FormStatus::Cold);
        assert_eq!(thresholds.classify(1.0, 300), FormStatus::Steady);
    }

    #[test]
    fn test_lighter_minutes_floor_is_configurable() {
        let lighter = FormThresholds {
            min_trend: 1.0,
            min_recent_minutes: 200,
        };
        assert_eq!(lighter.classify(1.2, 210), FormStatus::Hot);
        assert_eq!(FormThresholds::default().classify(1.2, 210), FormStatus::Steady);
    }

    #[test]
    fn test_form_trend_for_any_stat() {
        let mut records = sequence(1, &[90; 6], &[2.0; 6]);
        records[5].bps = 45.0;
        let season = aggregate_season(PlayerId::new(1), &records).unwrap();

        let bps_trend = form_trend(&season, &season.recent, Stat::Bps);
        assert!((bps_trend - (9.0 - 7.5)).abs() < 1e-12);
        assert_eq!(bps_trend, season.form_trend_bps);
        assert_eq!(points_form_trend(&season, &season.recent), 0.0);
    }

    #[test]
    fn test_hot_and_cold_lists() {
        let rising = sequence(1, &[90; 10], &[1.0, 1.0, 1.0, 1.0, 1.0, 9.0, 9.0, 9.0, 9.0, 9.0]);
        let falling = sequence(2, &[90; 10], &[9.0, 9.0, 9.0, 9.0, 9.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        let flat = sequence(3, &[90; 10], &[4.0; 10]);
        let benchwarmer = sequence(4, &[10; 10], &[0.0, 0.0, 0.0, 0.0, 0.0, 5.0, 5.0, 5.0, 5.0, 5.0]);

        let aggregates: Vec<SeasonAggregate> = [rising, falling, flat, benchwarmer]
            .iter()
            .map(|records| aggregate_season(records[0].player_id, records).unwrap())
            .collect();

        let thresholds = FormThresholds::default();
        let hot = hot_form_players(&aggregates, &thresholds);
        let cold = cold_form_players(&aggregates, &thresholds);

        assert_eq!(hot.len(), 1);
        assert_eq!(hot[0].player_id, PlayerId::new(1));
        assert_eq!(cold.len(), 1);
        assert_eq!(cold[0].player_id, PlayerId::new(2));
    }

    #[test]
    fn test_recent_form_leaders_respects_floor_and_order() {
        let a = sequence(1, &[90; 5], &[3.0; 5]);
        let b = sequence(2, &[90; 5], &[6.0; 5]);
        let c = sequence(3, &[30; 5], &[8.0; 5]);
        let aggregates: Vec<SeasonAggregate> = [a, b, c]
            .iter()
            .map(|records| aggregate_season(records[0].player_id, records).unwrap())
            .collect();

        let leaders = recent_form_leaders(&aggregates, Stat::Points, 200, None, 5);
        let ids: Vec<u64> = leaders.iter().map(|s| s.player_id.as_u64()).collect();
        assert_eq!(ids, vec![2, 1]);

        let loose = recent_form_leaders(&aggregates, Stat::Points, 0, None, 1);
        assert_eq!(loose[0].player_id, PlayerId::new(3));
    }

    fn priced(player: u64, position: Position, price: f64, points: f64) -> SeasonAggregate {
        let mut records = sequence(player, &[90; 6], &[points; 6]);
        for r in &mut records {
            r.position = Some(position);
            r.price = Some(price);
        }
        aggregate_season(PlayerId::new(player), &records).unwrap()
    }

    #[test]
    fn test_recent_form_leaders_by_position() {
        let aggregates = vec![
            priced(1, Position::MID, 8.0, 6.0),
            priced(2, Position::DEF, 5.0, 4.0),
            priced(3, Position::FWD, 9.0, 7.0),
            priced(4, Position::DEF, 4.5, 5.0),
        ];

        let defenders = recent_form_leaders(&aggregates, Stat::Points, 0, Some(Position::DEF), 5);
        let ids: Vec<u64> = defenders.iter().map(|s| s.player_id.as_u64()).collect();
        assert_eq!(ids, vec![4, 2]);

        let everyone = recent_form_leaders(&aggregates, Stat::Points, 0, None, 5);
        assert_eq!(everyone.len(), 4);
        assert_eq!(everyone[0].player_id, PlayerId::new(3));
    }

    #[test]
    fn test_points_per_million_and_value_board() {
        let mid = priced(1, Position::MID, 8.0, 6.0);
        assert_eq!(mid.position, Some(Position::MID));
        assert_eq!(mid.price, Some(8.0));
        assert_eq!(mid.points_per_million(), Some(36.0 / 8.0));

        let unpriced = aggregate_season(PlayerId::new(9), &sequence(9, &[90; 6], &[9.0; 6])).unwrap();
        assert_eq!(unpriced.points_per_million(), None);

        let aggregates = vec![
            mid,
            priced(2, Position::DEF, 5.0, 4.0),
            priced(3, Position::FWD, 9.0, 7.0),
            priced(4, Position::DEF, 4.5, 5.0),
            unpriced,
        ];

        let value = best_value_players(&aggregates, 450, None, 3);
        let ids: Vec<u64> = value.iter().map(|s| s.player_id.as_u64()).collect();
        // 30 / 4.5, 24 / 5.0, 42 / 9.0
        assert_eq!(ids, vec![4, 2, 3]);

        let forwards = best_value_players(&aggregates, 450, Some(Position::FWD), 3);
        assert_eq!(forwards.len(), 1);
        assert!(best_value_players(&aggregates, 600, None, 3).is_empty());
    }
}

#[cfg(test)]
mod penalty_tests {
    use super::*;

    #[test]
    fn test_penalty_heuristic_cases() {
        assert_eq!(estimate_penalties(0.0, 0.9), 0.0);
        assert_eq!(estimate_penalties(1.0, 0.5), 0.0);
        assert_eq!(estimate_penalties(1.0, 0.8), 1.0);
        assert_eq!(estimate_penalties(2.0, 1.2), 1.0);
        assert_eq!(estimate_penalties(1.0, 1.8), 0.0);
        assert_eq!(estimate_penalties(2.0, 1.6), 2.0);
        assert_eq!(estimate_penalties(3.0, 1.6), 2.0);
        assert_eq!(estimate_penalties(2.0, 2.5), 2.0);
    }

    #[test]
    fn test_non_penalty_xg_never_negative() {
        let mut r = record(1, 1, Venue::Home, 90, 8.0);
        r.goals = 1.0;
        r.xg = 0.72;
        r.xa = 0.1;

        let estimate = NonPenaltyEstimate::for_record(&r);
        assert_eq!(estimate.penalties, 1.0);
        assert_eq!(estimate.npxg, 0.0);
        assert_eq!(estimate.npxa, 0.1);
        assert_eq!(estimate.npxgi, 0.1);

        let line = StatLine::from_record(&r);
        assert_eq!(line.npxg_overperformance(), 0.0);
    }
}

#[cfg(test)]
mod feature_table_tests {
    use super::*;

    #[test]
    fn test_players_are_never_mixed() {
        let mut records = Vec::new();
        for round in 1..=4u16 {
            records.push(record(10, round, Venue::Home, 90, 10.0));
            records.push(record(20, round, Venue::Away, 90, 1.0));
        }

        let features = compute_player_features(&records, &[3]).unwrap();
        assert_eq!(features.season.len(), 2);
        assert_eq!(features.rolling.len(), 8);

        for row in features.rolling_for(PlayerId::new(20)) {
            let window = row.window(3).unwrap();
            assert_eq!(window.totals.points, window.totals.matches as f64);
        }
        assert_eq!(features.season_for(PlayerId::new(10)).unwrap().totals.points, 40.0);
    }

    #[test]
    fn test_unsorted_input_is_ordered_per_player() {
        let records = vec![
            record(1, 3, Venue::Home, 90, 3.0),
            record(1, 1, Venue::Home, 90, 1.0),
            record(1, 2, Venue::Away, 90, 2.0),
        ];

        let features = compute_player_features(&records, &[2]).unwrap();
        let rounds: Vec<u16> = features.rolling.iter().map(|r| r.round.as_u16()).collect();
        assert_eq!(rounds, vec![1, 2, 3]);
        assert_eq!(features.rolling[2].window(2).unwrap().totals.points, 5.0);
    }

    #[test]
    fn test_invalid_windows_rejected_even_without_records() {
        assert!(matches!(
            compute_player_features(&[], &[0]),
            Err(FormError::InvalidWindow)
        ));
        let empty = compute_player_features(&[], &DEFAULT_WINDOWS).unwrap();
        assert!(empty.rolling.is_empty());
        assert!(empty.season.is_empty());
    }
}
