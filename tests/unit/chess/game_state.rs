use crate::common::fixtures::{FOOLS_MATE, SCHOLARS_MATE};
use crate::common::{play, play_on, snapshot, sq};
use rookery::chess::{ChessError, Color, Game, GameStatus, LastMove, MoveKind};

#[cfg(test)]
mod turn_tests {
    use super::*;

    #[test]
    fn test_new_game_white_to_move() {
        let game = Game::new();
        assert_eq!(game.turn_color(), Color::White);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.history().is_empty());
        assert!(game.last_move().is_none());
        assert!(!game.is_in_check());
    }

    #[test]
    fn test_turns_alternate_on_success() {
        let mut game = Game::new();
        game.make_move("e4").unwrap();
        assert_eq!(game.turn_color(), Color::Black);
        game.make_move("e5").unwrap();
        assert_eq!(game.turn_color(), Color::White);
        game.make_move("Nf3").unwrap();
        assert_eq!(game.turn_color(), Color::Black);
        assert_eq!(game.history().as_slice(), &["e4", "e5", "Nf3"]);
        assert_eq!(game.history().last(), Some("Nf3"));
    }

    #[test]
    fn test_black_cannot_move_first() {
        let mut game = Game::new();
        assert!(matches!(
            game.make_move("e5"),
            Err(ChessError::NoLegalSource(_))
        ));
        assert_eq!(game.turn_color(), Color::White);
    }

    #[test]
    fn test_last_move_records_rows_and_column() {
        let game = play(&["e4"]);
        assert_eq!(
            game.last_move(),
            Some(LastMove {
                source_row: 6,
                dest_row: 4,
                dest_col: 4
            })
        );
    }
}

#[cfg(test)]
mod rejection_tests {
    use super::*;

    #[test]
    fn test_rejected_moves_change_nothing() {
        let mut game = play(&["e4", "e5"]);
        let before = snapshot(&game);

        for token in ["zz", "Ke3", "e5", "Nd2", "Bb5x", "O-O", "Qxf7", "exd5"] {
            assert!(game.make_move(token).is_err(), "{} should be rejected", token);
            assert_eq!(snapshot(&game), before, "{} changed the game", token);
        }
    }

    #[test]
    fn test_rejection_categories() {
        let mut game = Game::new();
        let category = |game: &mut Game, token: &str| game.make_move(token).unwrap_err().category();

        assert_eq!(category(&mut game, "e2e4"), "malformed-notation");
        assert_eq!(category(&mut game, "Ke2"), "no-legal-source");
        assert_eq!(category(&mut game, "O-O"), "castling-unavailable");
        assert_eq!(category(&mut game, "e5"), "no-legal-source");
    }

    #[test]
    fn test_coordinate_validation_reports_precise_reason() {
        let game = Game::new();
        assert_eq!(
            game.validate(sq("e4"), sq("e5")),
            Err(ChessError::EmptySource(sq("e4")))
        );
        assert_eq!(
            game.validate(sq("e7"), sq("e5")),
            Err(ChessError::WrongColor(sq("e7")))
        );
        assert_eq!(
            game.validate(sq("a1"), sq("a2")),
            Err(ChessError::FriendlyCapture(sq("a2")))
        );
        assert_eq!(
            game.validate(sq("e2"), sq("e2")),
            Err(ChessError::SameSquare(sq("e2")))
        );
        assert_eq!(
            game.validate(sq("a1"), sq("a5")),
            Err(ChessError::Blocked {
                from: sq("a1"),
                to: sq("a5")
            })
        );
        assert!(game.validate(sq("g1"), sq("f3")).is_ok());
    }
}

#[cfg(test)]
mod outcome_tests {
    use super::*;

    #[test]
    fn test_outcome_describes_the_move() {
        let mut game = Game::new();
        let outcome = game.make_move("e4").unwrap();
        assert_eq!(outcome.token, "e4");
        assert_eq!(outcome.mv.from, sq("e2"));
        assert_eq!(outcome.mv.to, sq("e4"));
        assert_eq!(outcome.kind, MoveKind::DoublePawnPush);
        assert_eq!(outcome.captured, None);
        assert_eq!(outcome.status, GameStatus::InProgress);

        let outcome = game.make_move("e6").unwrap();
        assert_eq!(outcome.kind, MoveKind::Normal);
    }

    #[test]
    fn test_capture_is_reported() {
        let mut game = play(&["e4", "d5"]);
        let outcome = game.make_move("exd5").unwrap();
        let captured = outcome.captured.unwrap();
        assert_eq!(captured.color, Color::Black);
        assert_eq!(game.board().pieces().count(), 31);
    }

    #[test]
    fn test_king_square_follows_the_king() {
        let game = play(&["e4", "e5", "Ke2", "Ke7"]);
        assert_eq!(game.king_square(Color::White), sq("e2"));
        assert_eq!(game.king_square(Color::Black), sq("e7"));
    }

    #[test]
    fn test_moved_pieces_are_marked() {
        let game = play(&["Nf3", "Nf6", "Ng1", "Ng8"]);
        let knight = game.board().get(sq("g1")).unwrap();
        assert!(knight.has_moved);
        assert!(!game.board().get(sq("b1")).unwrap().has_moved);
    }
}

#[cfg(test)]
mod checkmate_tests {
    use super::*;

    #[test]
    fn test_fools_mate() {
        let game = play(&FOOLS_MATE);
        assert!(game.is_checkmate());
        assert!(game.is_game_over());
        assert!(game.is_in_check());
        assert!(game.legal_moves().is_empty());
        assert_eq!(
            game.status(),
            GameStatus::Checkmate {
                winner: Color::Black
            }
        );
        assert_eq!(game.turn_color(), Color::White);
    }

    #[test]
    fn test_scholars_mate() {
        let game = play(&SCHOLARS_MATE);
        assert_eq!(
            game.status(),
            GameStatus::Checkmate {
                winner: Color::White
            }
        );
    }

    #[test]
    fn test_no_moves_after_checkmate() {
        let mut game = play(&FOOLS_MATE);
        let before = snapshot(&game);
        assert_eq!(game.make_move("a3"), Err(ChessError::GameOver));
        assert_eq!(snapshot(&game), before);
    }

    #[test]
    fn test_check_without_mate_keeps_the_game_going() {
        let game = play(&["e4", "f5", "Qh5"]);
        assert!(game.is_in_check());
        assert!(!game.is_checkmate());
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_back_rank_mate_from_a_position() {
        let mut game = Game::from_placement("6k1/5ppp/8/8/8/8/8/R5K1", Color::White).unwrap();
        let outcome = game.make_move("Ra8").unwrap();
        assert_eq!(
            outcome.status,
            GameStatus::Checkmate {
                winner: Color::White
            }
        );
    }

    #[test]
    fn test_position_already_mated_is_concluded() {
        let game = Game::from_placement("R5k1/5ppp/8/8/8/8/8/6K1", Color::Black).unwrap();
        assert!(game.is_checkmate());
    }
}

#[cfg(test)]
mod stalemate_tests {
    use super::*;

    #[test]
    fn test_queen_move_stalemates_the_lone_king() {
        let mut game = Game::from_placement("k7/8/1K6/8/8/8/2Q5/8", Color::White).unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);

        game.make_move("Qc7").unwrap();
        assert!(game.is_stalemate());
        assert!(!game.is_checkmate());
        assert!(!game.is_in_check());
        assert_eq!(game.make_move("Ka7"), Err(ChessError::GameOver));
    }
}

#[cfg(test)]
mod construction_tests {
    use super::*;

    #[test]
    fn test_position_needs_both_kings() {
        let err = Game::from_placement("8/8/8/8/8/8/8/4K3", Color::White).unwrap_err();
        assert_eq!(err.category(), "invalid-placement");
    }

    #[test]
    fn test_games_are_independent() {
        let mut first = Game::new();
        let mut second = Game::new();

        play_on(&mut first, &["e4", "e5"]);
        play_on(&mut second, &["d4"]);

        assert_eq!(first.turn_color(), Color::White);
        assert_eq!(second.turn_color(), Color::Black);
        assert!(first.board().get(sq("d2")).is_some());
        assert!(second.board().get(sq("e2")).is_some());
        assert_eq!(first.history().len(), 2);
        assert_eq!(second.history().len(), 1);
    }

    #[test]
    fn test_default_is_new() {
        assert_eq!(Game::default(), Game::new());
    }
}
