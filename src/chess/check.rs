use super::rules::pseudo_legal;
use super::{Board, Color, Square};
use serde::{Deserialize, Serialize};

/// Cached king squares for both sides. Updated on every king move, never rescanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KingSquares {
    pub white: Square,
    pub black: Square,
}

impl KingSquares {
    /// King squares of the standard starting position
    pub const fn starting() -> Self {
        Self {
            white: Square::new_unchecked(7, 4),
            black: Square::new_unchecked(0, 4),
        }
    }

    pub fn get(&self, color: Color) -> Square {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    pub fn set(&mut self, color: Color, square: Square) {
        match color {
            Color::White => self.white = square,
            Color::Black => self.black = square,
        }
    }
}

/// True if any piece of the opposing color can reach `king_square`.
///
/// En passant can never hit an occupied square, so no last-move record is needed.
pub fn is_check(board: &Board, color: Color, king_square: Square) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.color != color)
        .any(|(square, _)| pseudo_legal(board, None, square, king_square))
}

/// Every opposing piece that reaches `king_square`
pub fn checkers(board: &Board, color: Color, king_square: Square) -> Vec<Square> {
    board
        .pieces()
        .filter(|(_, piece)| piece.color != color)
        .filter(|(square, _)| pseudo_legal(board, None, *square, king_square))
        .map(|(square, _)| square)
        .collect()
}
