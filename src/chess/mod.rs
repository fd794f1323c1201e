// Re-export all public items
pub use self::board::Board;
pub use self::check::{is_check, KingSquares};
pub use self::error::ChessError;
pub use self::game::{Game, GameStatus};
pub use self::history::{parse_movetext, MoveHistory};
pub use self::legality::Validator;
pub use self::moves::{CastleSide, LastMove, Move, MoveKind, MoveOutcome};
pub use self::notation::Notation;
pub use self::piece::{Color, Piece, PieceKind};
pub use self::square::Square;

// Define submodules
mod board;
pub mod check;
mod error;
mod game;
mod history;
mod legality;
mod moves;
mod notation;
mod piece;
pub mod rules;
mod square;
