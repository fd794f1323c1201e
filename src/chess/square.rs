use super::error::ChessError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A board square addressed by matrix coordinates.
///
/// Row 0 is rank 8 (Black's back rank) and row 7 is rank 1; column 0 is file `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub fn new(row: i8, col: i8) -> Result<Self, ChessError> {
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return Err(ChessError::OutOfBounds { row, col });
        }

        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Create square without validation (for internal use when bounds are guaranteed)
    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Create square from file and rank characters, e.g. ('e', '4')
    pub fn from_chars(file: char, rank: char) -> Result<Self, ChessError> {
        if !('a'..='h').contains(&file) {
            return Err(ChessError::InvalidSquare(format!(
                "Invalid file '{}'. Must be a-h.",
                file
            )));
        }

        if !('1'..='8').contains(&rank) {
            return Err(ChessError::InvalidSquare(format!(
                "Invalid rank '{}'. Must be 1-8.",
                rank
            )));
        }

        Ok(Square {
            row: 7 - (rank as u8 - b'1'),
            col: file as u8 - b'a',
        })
    }

    /// Column index of a file letter ('a' -> 0)
    pub fn file_index(file: char) -> Option<u8> {
        ('a'..='h')
            .contains(&file)
            .then(|| file as u8 - b'a')
    }

    pub fn file_char(&self) -> char {
        (self.col + b'a') as char
    }

    pub fn rank_char(&self) -> char {
        (b'8' - self.row) as char
    }

    /// The square `(drow, dcol)` away, if it is still on the board
    pub fn offset(&self, drow: i8, dcol: i8) -> Option<Square> {
        Square::new(self.row as i8 + drow, self.col as i8 + dcol).ok()
    }

    /// Signed (row, col) delta from `self` to `other`
    pub fn delta(&self, other: &Square) -> (i8, i8) {
        (
            other.row as i8 - self.row as i8,
            other.col as i8 - self.col as i8,
        )
    }

    /// Squares strictly between two squares on a shared rank, file or diagonal.
    /// Empty when the squares are adjacent or not aligned.
    pub fn between(&self, other: &Square) -> Vec<Square> {
        let (drow, dcol) = self.delta(other);
        let aligned = drow == 0 || dcol == 0 || drow.abs() == dcol.abs();
        if !aligned {
            return Vec::new();
        }

        let step = (drow.signum(), dcol.signum());
        let steps = drow.abs().max(dcol.abs());
        (1..steps)
            .filter_map(|i| self.offset(step.0 * i, step.1 * i))
            .collect()
    }

    /// All 64 squares, row by row from row 0
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square { row, col }))
    }
}

// Algebraic notation
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => Self::from_chars(file, rank),
            _ => Err(ChessError::InvalidSquare(format!(
                "Square must be exactly 2 characters (e.g., 'e4'), got '{}'",
                s
            ))),
        }
    }
}
