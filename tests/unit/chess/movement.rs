use crate::common::sq;
use rookery::chess::rules::{castling_side, check_pattern, en_passant_victim, pseudo_legal};
use rookery::chess::{Board, CastleSide, ChessError, LastMove};

/// Every destination the piece on `from` reaches by pattern alone, as sorted algebraic squares
fn reachable(board: &Board, from: &str) -> Vec<String> {
    let mut squares: Vec<String> = rookery::chess::Square::all()
        .filter(|&to| pseudo_legal(board, None, sq(from), to))
        .map(|to| to.to_string())
        .collect();
    squares.sort();
    squares
}

#[cfg(test)]
mod knight_tests {
    use super::*;

    #[test]
    fn test_knight_in_centre_has_eight_targets() {
        let board = Board::from_placement("8/8/8/8/3N4/8/8/8").unwrap();
        assert_eq!(
            reachable(&board, "d4"),
            vec!["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"]
        );
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let board = Board::new();
        assert_eq!(reachable(&board, "b1"), vec!["a3", "c3"]);
    }
}

#[cfg(test)]
mod sliding_piece_tests {
    use super::*;

    #[test]
    fn test_bishop_stops_at_first_piece() {
        // Black pawn on f6 can be captured, nothing beyond it
        let board = Board::from_placement("8/8/5p2/8/3B4/8/8/8").unwrap();
        let targets = reachable(&board, "d4");
        assert!(targets.contains(&"f6".to_string()));
        assert!(!targets.contains(&"g7".to_string()));
        assert!(targets.contains(&"a1".to_string()));
        assert!(targets.contains(&"a7".to_string()));
    }

    #[test]
    fn test_rook_moves_in_straight_lines_only() {
        let board = Board::from_placement("8/8/8/8/8/8/8/R7").unwrap();
        let targets = reachable(&board, "a1");
        assert_eq!(targets.len(), 14);
        assert!(!targets.contains(&"b2".to_string()));
    }

    #[test]
    fn test_queen_combines_rook_and_bishop() {
        let board = Board::from_placement("8/8/8/8/3Q4/8/8/8").unwrap();
        assert_eq!(reachable(&board, "d4").len(), 27);
    }

    #[test]
    fn test_blocked_path_is_reported() {
        let board = Board::new();
        assert_eq!(
            check_pattern(&board, None, sq("c1"), sq("e3")),
            Err(ChessError::Blocked {
                from: sq("c1"),
                to: sq("e3")
            })
        );
        assert_eq!(
            check_pattern(&board, None, sq("a1"), sq("b3")),
            Err(ChessError::IllegalPattern {
                from: sq("a1"),
                to: sq("b3")
            })
        );
    }
}

#[cfg(test)]
mod pawn_tests {
    use super::*;

    #[test]
    fn test_white_pawn_single_and_double_step_from_home() {
        let board = Board::new();
        assert_eq!(reachable(&board, "e2"), vec!["e3", "e4"]);
    }

    #[test]
    fn test_black_pawn_moves_toward_row_seven() {
        let board = Board::new();
        assert_eq!(reachable(&board, "d7"), vec!["d5", "d6"]);
    }

    #[test]
    fn test_no_double_step_off_home_row() {
        let board = Board::from_placement("8/8/8/8/8/4P3/8/8").unwrap();
        assert_eq!(reachable(&board, "e3"), vec!["e4"]);
    }

    #[test]
    fn test_double_step_needs_both_squares_empty() {
        let blocked_near = Board::from_placement("8/8/8/8/8/4n3/4P3/8").unwrap();
        assert!(reachable(&blocked_near, "e2").is_empty());

        let blocked_far = Board::from_placement("8/8/8/8/4n3/8/4P3/8").unwrap();
        assert_eq!(reachable(&blocked_far, "e2"), vec!["e3"]);
    }

    #[test]
    fn test_diagonal_needs_an_enemy() {
        let board = Board::from_placement("8/8/8/3p1N2/4P3/8/8/8").unwrap();
        assert_eq!(reachable(&board, "e4"), vec!["d5", "e5"]);
    }

    #[test]
    fn test_pawn_never_moves_backward() {
        let board = Board::from_placement("8/8/8/8/4P3/3p4/8/8").unwrap();
        assert!(!pseudo_legal(&board, None, sq("e4"), sq("d3")));
        assert!(!pseudo_legal(&board, None, sq("e4"), sq("e3")));
    }
}

#[cfg(test)]
mod en_passant_pattern_tests {
    use super::*;

    fn black_double_step_to_d5() -> LastMove {
        LastMove {
            source_row: 1,
            dest_row: 3,
            dest_col: 3,
        }
    }

    #[test]
    fn test_victim_is_beside_the_pawn_not_on_the_target() {
        let board = Board::from_placement("8/8/8/3pP3/8/8/8/8").unwrap();
        assert_eq!(
            en_passant_victim(&board, Some(black_double_step_to_d5()), sq("e5"), sq("d6")),
            Some(sq("d5"))
        );
        assert!(pseudo_legal(&board, Some(black_double_step_to_d5()), sq("e5"), sq("d6")));
    }

    #[test]
    fn test_requires_the_immediately_preceding_double_step() {
        let board = Board::from_placement("8/8/8/3pP3/8/8/8/8").unwrap();
        let single_step = LastMove {
            source_row: 2,
            dest_row: 3,
            dest_col: 3,
        };
        assert_eq!(en_passant_victim(&board, Some(single_step), sq("e5"), sq("d6")), None);
        assert_eq!(en_passant_victim(&board, None, sq("e5"), sq("d6")), None);
    }

    #[test]
    fn test_only_toward_the_advanced_pawn_file() {
        let board = Board::from_placement("8/8/8/3pP3/8/8/8/8").unwrap();
        assert_eq!(
            en_passant_victim(&board, Some(black_double_step_to_d5()), sq("e5"), sq("f6")),
            None
        );
    }

    #[test]
    fn test_only_pawns_capture_en_passant() {
        let board = Board::from_placement("8/8/8/3pB3/8/8/8/8").unwrap();
        assert_eq!(
            en_passant_victim(&board, Some(black_double_step_to_d5()), sq("e5"), sq("d6")),
            None
        );
    }
}

#[cfg(test)]
mod castling_pattern_tests {
    use super::*;

    #[test]
    fn test_clear_back_rank_allows_both_sides() {
        let board = Board::from_placement("r3k2r/8/8/8/8/8/8/R3K2R").unwrap();
        assert_eq!(castling_side(&board, sq("e1"), sq("g1")), Some(CastleSide::Kingside));
        assert_eq!(castling_side(&board, sq("e1"), sq("c1")), Some(CastleSide::Queenside));
        assert_eq!(castling_side(&board, sq("e8"), sq("g8")), Some(CastleSide::Kingside));
        assert_eq!(castling_side(&board, sq("e8"), sq("c8")), Some(CastleSide::Queenside));
    }

    #[test]
    fn test_b_file_piece_blocks_queenside_only() {
        let board = Board::from_placement("4k3/8/8/8/8/8/8/RN2K2R").unwrap();
        assert_eq!(castling_side(&board, sq("e1"), sq("c1")), None);
        assert_eq!(castling_side(&board, sq("e1"), sq("g1")), Some(CastleSide::Kingside));
    }

    #[test]
    fn test_moved_rook_or_king_cannot_castle() {
        let mut board = Board::from_placement("4k3/8/8/8/8/8/8/4K2R").unwrap();
        let rook = board.get(sq("h1")).unwrap();
        board.set(sq("h1"), Some(rook.moved()));
        assert_eq!(castling_side(&board, sq("e1"), sq("g1")), None);

        let mut board = Board::from_placement("4k3/8/8/8/8/8/8/4K2R").unwrap();
        let king = board.get(sq("e1")).unwrap();
        board.set(sq("e1"), Some(king.moved()));
        assert_eq!(castling_side(&board, sq("e1"), sq("g1")), None);
    }

    #[test]
    fn test_enemy_rook_in_the_corner_does_not_count() {
        let board = Board::from_placement("4k3/8/8/8/8/8/8/4K2r").unwrap();
        assert_eq!(castling_side(&board, sq("e1"), sq("g1")), None);
    }
}
