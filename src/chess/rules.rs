//! Per-piece movement patterns.
//!
//! Everything here is check-unaware: a move that matches its piece's pattern
//! may still leave the mover's own king attacked. King safety lives in
//! [`super::legality`].

use super::moves::{CastleSide, LastMove};
use super::{Board, ChessError, Color, Piece, PieceKind, Square};

type PatternFn = fn(&Board, Option<LastMove>, Square, Square) -> Result<(), ChessError>;

impl PieceKind {
    /// Movement rule for this kind of piece
    fn pattern(&self) -> PatternFn {
        match self {
            PieceKind::Pawn => pawn_pattern,
            PieceKind::Knight => knight_pattern,
            PieceKind::Bishop => bishop_pattern,
            PieceKind::Rook => rook_pattern,
            PieceKind::Queen => queen_pattern,
            PieceKind::King => king_pattern,
        }
    }
}

/// Shared preconditions evaluated before any piece-specific rule.
///
/// Returns the moving piece. Bounds are carried by the `Square` type itself.
pub fn check_start_and_end(
    board: &Board,
    color: Color,
    from: Square,
    to: Square,
) -> Result<Piece, ChessError> {
    if from == to {
        return Err(ChessError::SameSquare(from));
    }

    let piece = board.get(from).ok_or(ChessError::EmptySource(from))?;

    if piece.color != color {
        return Err(ChessError::WrongColor(from));
    }

    if let Some(target) = board.get(to) {
        if target.color == color {
            return Err(ChessError::FriendlyCapture(to));
        }
    }

    Ok(piece)
}

/// Match the move against the pattern of the piece standing on `from`.
///
/// Assumes [`check_start_and_end`] already passed. Fails with `IllegalPattern`
/// when the geometry is wrong and `Blocked` when the path is occupied.
pub fn check_pattern(
    board: &Board,
    last_move: Option<LastMove>,
    from: Square,
    to: Square,
) -> Result<(), ChessError> {
    let piece = board.get(from).ok_or(ChessError::EmptySource(from))?;
    (piece.kind.pattern())(board, last_move, from, to)
}

/// True if the piece on `from` may move to `to`, ignoring king safety
pub fn pseudo_legal(board: &Board, last_move: Option<LastMove>, from: Square, to: Square) -> bool {
    let Some(piece) = board.get(from) else {
        return false;
    };

    check_start_and_end(board, piece.color, from, to).is_ok()
        && check_pattern(board, last_move, from, to).is_ok()
}

/// Square of the pawn captured en passant by moving the pawn on `from` to `to`.
///
/// The victim stands on the mover's row and the destination's column, and must
/// have arrived there with a two-row advance on the immediately preceding move.
pub fn en_passant_victim(
    board: &Board,
    last_move: Option<LastMove>,
    from: Square,
    to: Square,
) -> Option<Square> {
    let pawn = board.get(from).filter(|p| p.kind == PieceKind::Pawn)?;
    let last = last_move?;

    let (drow, dcol) = from.delta(&to);
    if from.row != pawn.color.en_passant_row() || drow != pawn.color.forward() || dcol.abs() != 1
    {
        return None;
    }

    if !last.spans_two_rows() || last.dest_row != from.row || last.dest_col != to.col {
        return None;
    }

    let victim = last.destination();
    let is_enemy_pawn = board
        .get(victim)
        .is_some_and(|p| p.is(PieceKind::Pawn, pawn.color.next()));

    (is_enemy_pawn && board.is_empty(to)).then_some(victim)
}

/// Castling side if the king on `from` may castle to `to`, ignoring attacks.
///
/// Requires an unmoved king on its home square, an unmoved rook of the same
/// color in the corner, and empty squares between them.
pub fn castling_side(board: &Board, from: Square, to: Square) -> Option<CastleSide> {
    let king = board
        .get(from)
        .filter(|p| p.kind == PieceKind::King && !p.has_moved)?;
    let home = king.color.back_row();

    if from != Square::new_unchecked(home, 4) || to.row != home {
        return None;
    }

    let side = [CastleSide::Kingside, CastleSide::Queenside]
        .into_iter()
        .find(|side| side.king_dest_col() == to.col)?;

    let rook_square = Square::new_unchecked(home, side.rook_col());
    let rook_ready = board
        .get(rook_square)
        .is_some_and(|p| p.is(PieceKind::Rook, king.color) && !p.has_moved);
    if !rook_ready {
        return None;
    }

    from.between(&rook_square)
        .into_iter()
        .all(|square| board.is_empty(square))
        .then_some(side)
}

fn illegal(from: Square, to: Square) -> ChessError {
    ChessError::IllegalPattern { from, to }
}

fn clear_path(board: &Board, from: Square, to: Square) -> Result<(), ChessError> {
    if from.between(&to).into_iter().all(|sq| board.is_empty(sq)) {
        Ok(())
    } else {
        Err(ChessError::Blocked { from, to })
    }
}

fn pawn_pattern(
    board: &Board,
    last_move: Option<LastMove>,
    from: Square,
    to: Square,
) -> Result<(), ChessError> {
    let color = board.get(from).ok_or(ChessError::EmptySource(from))?.color;
    let forward = color.forward();
    let (drow, dcol) = from.delta(&to);

    match (drow, dcol.abs()) {
        (d, 0) if d == forward => {
            if board.is_empty(to) {
                Ok(())
            } else {
                Err(ChessError::Blocked { from, to })
            }
        }
        (d, 0) if d == 2 * forward && from.row == color.pawn_row() => {
            clear_path(board, from, to)?;
            if board.is_empty(to) {
                Ok(())
            } else {
                Err(ChessError::Blocked { from, to })
            }
        }
        (d, 1) if d == forward => {
            if board.get(to).is_some_and(|p| p.color != color)
                || en_passant_victim(board, last_move, from, to).is_some()
            {
                Ok(())
            } else {
                Err(illegal(from, to))
            }
        }
        _ => Err(illegal(from, to)),
    }
}

fn knight_pattern(
    _board: &Board,
    _last_move: Option<LastMove>,
    from: Square,
    to: Square,
) -> Result<(), ChessError> {
    let (drow, dcol) = from.delta(&to);
    match (drow.abs(), dcol.abs()) {
        (1, 2) | (2, 1) => Ok(()),
        _ => Err(illegal(from, to)),
    }
}

fn bishop_pattern(
    board: &Board,
    _last_move: Option<LastMove>,
    from: Square,
    to: Square,
) -> Result<(), ChessError> {
    let (drow, dcol) = from.delta(&to);
    if drow.abs() != dcol.abs() {
        return Err(illegal(from, to));
    }
    clear_path(board, from, to)
}

fn rook_pattern(
    board: &Board,
    _last_move: Option<LastMove>,
    from: Square,
    to: Square,
) -> Result<(), ChessError> {
    let (drow, dcol) = from.delta(&to);
    if (drow == 0) == (dcol == 0) {
        return Err(illegal(from, to));
    }
    clear_path(board, from, to)
}

fn queen_pattern(
    board: &Board,
    last_move: Option<LastMove>,
    from: Square,
    to: Square,
) -> Result<(), ChessError> {
    let (drow, dcol) = from.delta(&to);
    if drow == 0 || dcol == 0 {
        rook_pattern(board, last_move, from, to)
    } else {
        bishop_pattern(board, last_move, from, to)
    }
}

fn king_pattern(
    board: &Board,
    _last_move: Option<LastMove>,
    from: Square,
    to: Square,
) -> Result<(), ChessError> {
    let (drow, dcol) = from.delta(&to);
    if drow.abs() <= 1 && dcol.abs() <= 1 {
        return Ok(());
    }

    match castling_side(board, from, to) {
        Some(_) => Ok(()),
        None => Err(illegal(from, to)),
    }
}
