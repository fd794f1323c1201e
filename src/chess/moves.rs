use super::game::GameStatus;
use super::piece::Piece;
use super::square::Square;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A resolved move: concrete source and destination squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Check if this is a king-style castling step (two files along the same row)
    pub fn is_castling_shape(&self) -> bool {
        self.from.row == self.to.row && self.from.col.abs_diff(self.to.col) == 2
    }

    /// The record kept for the en passant test on the following turn
    pub fn record(&self) -> LastMove {
        LastMove {
            source_row: self.from.row,
            dest_row: self.to.row,
            dest_col: self.to.col,
        }
    }
}

// Coordinate notation, e.g. "e2e4"
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Where the previous move started and ended. Only used to decide en passant eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LastMove {
    pub source_row: u8,
    pub dest_row: u8,
    pub dest_col: u8,
}

impl LastMove {
    /// Square the previous move landed on
    pub fn destination(&self) -> Square {
        Square::new_unchecked(self.dest_row, self.dest_col)
    }

    /// Whether the previous move covered two rows (a double pawn push when a pawn made it)
    pub fn spans_two_rows(&self) -> bool {
        self.source_row.abs_diff(self.dest_row) == 2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Column the rook starts on
    pub fn rook_col(&self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// Column the king lands on
    pub fn king_dest_col(&self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// Column the king passes over, which is also where the rook lands
    pub fn king_transit_col(&self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    pub fn notation(&self) -> &'static str {
        match self {
            CastleSide::Kingside => "O-O",
            CastleSide::Queenside => "O-O-O",
        }
    }
}

/// What kind of move was applied, decided on the board before the move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    Normal,
    DoublePawnPush,
    EnPassant,
    Castle(CastleSide),
}

/// Result of a successful `Game::make_move`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub token: String,
    pub mv: Move,
    pub kind: MoveKind,
    pub captured: Option<Piece>,
    pub status: GameStatus,
}
