//! Full legality: movement pattern plus king safety.

use super::check::{is_check, KingSquares};
use super::moves::{LastMove, Move};
use super::rules::{castling_side, check_pattern, check_start_and_end, en_passant_victim};
use super::{Board, ChessError, Color, PieceKind, Square};
use tracing::trace;

/// Read-only view of a position used to judge moves.
///
/// Holds everything legality depends on besides the board itself: the
/// previous move (for en passant) and the cached king squares.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    board: &'a Board,
    last_move: Option<LastMove>,
    kings: KingSquares,
}

impl<'a> Validator<'a> {
    pub fn new(board: &'a Board, last_move: Option<LastMove>, kings: KingSquares) -> Self {
        Self {
            board,
            last_move,
            kings,
        }
    }

    pub fn board(&self) -> &Board {
        self.board
    }

    /// Validate a move for `color`, reporting the precise reason when it is not legal.
    ///
    /// Order: shared preconditions, piece pattern, then a simulation of the
    /// move on a copy of the board to make sure the mover's king is not left
    /// attacked. A castle additionally requires that the king is not in check
    /// and does not pass over an attacked square.
    pub fn validate(&self, color: Color, from: Square, to: Square) -> Result<(), ChessError> {
        let piece = check_start_and_end(self.board, color, from, to)?;
        check_pattern(self.board, self.last_move, from, to)?;

        let king_after = if piece.kind == PieceKind::King {
            to
        } else {
            self.kings.get(color)
        };

        if piece.kind == PieceKind::King {
            if let Some(side) = castling_side(self.board, from, to) {
                let transit = Square::new_unchecked(from.row, side.king_transit_col());
                if self.in_check(color) || self.exposes_king(color, from, transit, transit) {
                    return Err(ChessError::KingExposed { from, to });
                }
            }
        }

        if self.exposes_king(color, from, to, king_after) {
            return Err(ChessError::KingExposed { from, to });
        }

        Ok(())
    }

    /// Like [`validate`](Self::validate), but wrong geometry is `Ok(false)`
    /// rather than an error. Every other failure is still reported.
    pub fn is_legal(&self, color: Color, from: Square, to: Square) -> Result<bool, ChessError> {
        match self.validate(color, from, to) {
            Ok(()) => Ok(true),
            Err(e) if e.is_geometry() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Every legal move for `color`, ordered by source square then destination square
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        self.board
            .pieces()
            .filter(|(_, piece)| piece.color == color)
            .flat_map(move |(from, _)| {
                Square::all()
                    .filter(move |&to| self.validate(color, from, to).is_ok())
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }

    /// Stops at the first legal move found
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.board
            .pieces()
            .filter(|(_, piece)| piece.color == color)
            .any(|(from, _)| Square::all().any(|to| self.validate(color, from, to).is_ok()))
    }

    /// Square of the piece taken by moving `from` to `to`: the destination
    /// when it is occupied, otherwise an en passant victim
    pub fn capture_square(&self, from: Square, to: Square) -> Option<Square> {
        if self.board.get(to).is_some() {
            Some(to)
        } else {
            en_passant_victim(self.board, self.last_move, from, to)
        }
    }

    pub fn in_check(&self, color: Color) -> bool {
        is_check(self.board, color, self.kings.get(color))
    }

    /// In check with no legal move
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.in_check(color) && !self.has_legal_move(color)
    }

    /// Not in check, yet no legal move
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.in_check(color) && !self.has_legal_move(color)
    }

    /// Play the move on a copy of the board and test whether the king on
    /// `king_after` is attacked. The copy removes an en passant victim but
    /// leaves a castling rook where it is.
    fn exposes_king(&self, color: Color, from: Square, to: Square, king_after: Square) -> bool {
        let mut scratch = *self.board;

        if let Some(victim) = en_passant_victim(&scratch, self.last_move, from, to) {
            scratch.set(victim, None);
        }
        let moving = scratch.take(from);
        scratch.set(to, moving);

        let exposed = is_check(&scratch, color, king_after);
        if exposed {
            trace!("{} {} -> {} leaves the king on {} attacked", color, from, to, king_after);
        }
        exposed
    }
}
