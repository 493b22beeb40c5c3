//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod form_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let form_error = FormError::from(json_error);

        match form_error {
            FormError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let form_error = FormError::from(io_error);

        match form_error {
            FormError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let form_error = FormError::from(parse_error);

        match form_error {
            FormError::InvalidId(_) => (),
            _ => panic!("Expected InvalidId error variant"),
        }
    }

    #[test]
    fn test_negative_minutes_message() {
        let error = FormError::NegativeMinutes {
            player_id: PlayerId::new(7),
            round: Gameweek::new(3),
            minutes: -12,
        };

        let message = error.to_string();
        assert!(message.contains("-12"));
        assert!(message.contains("player 7"));
        assert!(message.contains("round 3"));
    }

    #[test]
    fn test_unordered_rounds_message() {
        let error = FormError::UnorderedRounds {
            player_id: PlayerId::new(11),
            previous: Gameweek::new(5),
            current: Gameweek::new(4),
        };

        assert_eq!(
            error.to_string(),
            "Rounds out of order for player 11: round 4 follows round 5"
        );
    }

    #[test]
    fn test_mixed_players_message() {
        let error = FormError::MixedPlayers {
            expected: PlayerId::new(1),
            found: PlayerId::new(2),
        };

        let message = error.to_string();
        assert!(message.contains("player 1"));
        assert!(message.contains("player 2"));
    }

    #[test]
    fn test_unknown_team_and_venue_messages() {
        let error = FormError::UnknownTeam {
            team_id: TeamId::new(21),
        };
        assert_eq!(error.to_string(), "Unknown team: 21");

        let error = FormError::InvalidVenue {
            value: "neutral".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid venue flag: neutral");

        let error = FormError::TeamNotFound {
            query: "Spurs".to_string(),
        };
        assert_eq!(error.to_string(), "No team matches 'Spurs'");
    }

    #[test]
    fn test_error_debug_format() {
        let error = FormError::InvalidWindow;
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("InvalidWindow"));
    }
}
