use super::square::Square;
use thiserror::Error;

/// Every way a move can be rejected by the engine.
///
/// A rejected move never mutates the game, so callers can report the error and
/// ask for another move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("Invalid move format '{0}'. Try moves like 'e4', 'Nf3', 'exd5', 'Nbd2' or 'O-O'")]
    MalformedNotation(String),

    #[error("Invalid square: {0}")]
    InvalidSquare(String),

    #[error("Invalid piece placement: {0}")]
    InvalidPlacement(String),

    #[error("Destination ({row},{col}) is off the board")]
    OutOfBounds { row: i8, col: i8 },

    #[error("Source and destination are the same square ({0})")]
    SameSquare(Square),

    #[error("No piece on {0}")]
    EmptySource(Square),

    #[error("The piece on {0} belongs to the other side")]
    WrongColor(Square),

    #[error("Cannot capture your own piece on {0}")]
    FriendlyCapture(Square),

    #[error("The piece on {from} cannot move to {to}")]
    IllegalPattern { from: Square, to: Square },

    #[error("The path from {from} to {to} is blocked")]
    Blocked { from: Square, to: Square },

    #[error("Moving {from} to {to} leaves the king in check")]
    KingExposed { from: Square, to: Square },

    #[error("'{0}' is ambiguous; add the source file (e.g. 'Nbd2')")]
    AmbiguousSource(String),

    #[error("No piece can legally play '{0}'")]
    NoLegalSource(String),

    #[error("Castling is not available: '{0}'")]
    CastlingUnavailable(String),

    #[error("The game is already over")]
    GameOver,
}

impl ChessError {
    /// Stable name of the failure category, used in logs and replay reports.
    pub fn category(&self) -> &'static str {
        match self {
            ChessError::MalformedNotation(_) => "malformed-notation",
            ChessError::InvalidSquare(_) => "invalid-square",
            ChessError::InvalidPlacement(_) => "invalid-placement",
            ChessError::OutOfBounds { .. } => "out-of-bounds",
            ChessError::SameSquare(_) => "same-square",
            ChessError::EmptySource(_) => "empty-source",
            ChessError::WrongColor(_) => "wrong-color",
            ChessError::FriendlyCapture(_) => "friendly-capture",
            ChessError::IllegalPattern { .. } => "illegal-pattern",
            ChessError::Blocked { .. } => "blocked",
            ChessError::KingExposed { .. } => "king-exposed",
            ChessError::AmbiguousSource(_) => "ambiguous-source",
            ChessError::NoLegalSource(_) => "no-legal-source",
            ChessError::CastlingUnavailable(_) => "castling-unavailable",
            ChessError::GameOver => "game-over",
        }
    }

    /// Geometry failures: the piece is right but it cannot get there.
    pub fn is_geometry(&self) -> bool {
        matches!(
            self,
            ChessError::IllegalPattern { .. } | ChessError::Blocked { .. }
        )
    }
}
