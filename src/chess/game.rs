use super::check::{checkers, KingSquares};
use super::history::MoveHistory;
use super::legality::Validator;
use super::moves::{LastMove, Move, MoveKind, MoveOutcome};
use super::notation::Notation;
use super::rules::{castling_side, en_passant_victim};
use super::{Board, ChessError, Color, Piece, PieceKind, Square};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Where the game stands after the last applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {} wins", winner),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// One game of chess driven by short algebraic move tokens.
///
/// All state is owned by the instance, so any number of games can coexist.
/// Every field changes only through a successful [`Game::make_move`]; a
/// rejected move leaves the game exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Color,
    kings: KingSquares,
    history: MoveHistory,
    last_move: Option<LastMove>,
    status: GameStatus,
}

impl Game {
    /// A new game from the standard starting position, White to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Color::White,
            kings: KingSquares::starting(),
            history: MoveHistory::new(),
            last_move: None,
            status: GameStatus::InProgress,
        }
    }

    /// A game from an arbitrary position with `turn` to move.
    ///
    /// Both kings must be on the board. The status is evaluated immediately,
    /// so a position with no legal reply is already concluded.
    pub fn from_board(board: Board, turn: Color) -> Result<Self, ChessError> {
        let find = |color: Color| {
            board.find_king(color).ok_or_else(|| {
                ChessError::InvalidPlacement(format!("no {} king on the board", color))
            })
        };
        let kings = KingSquares {
            white: find(Color::White)?,
            black: find(Color::Black)?,
        };

        let mut game = Self {
            board,
            turn,
            kings,
            history: MoveHistory::new(),
            last_move: None,
            status: GameStatus::InProgress,
        };
        game.status = game.evaluate_status();
        Ok(game)
    }

    /// Build a game from a FEN piece placement, e.g. `"4k3/8/8/8/8/8/8/4K2R"`
    pub fn from_placement(placement: &str, turn: Color) -> Result<Self, ChessError> {
        Self::from_board(Board::from_placement(placement)?, turn)
    }

    /// Parse, resolve and apply a move token for the side to move.
    ///
    /// Validation happens entirely before the first mutation, so on error
    /// the game is untouched.
    pub fn make_move(&mut self, token: &str) -> Result<MoveOutcome, ChessError> {
        if self.status.is_over() {
            return Err(ChessError::GameOver);
        }

        let notation: Notation = token.parse()?;
        let mv = notation.resolve(&self.validator(), self.turn)?;
        let kind = self.classify(mv);

        let captured = self.apply(mv, kind);
        let mover = self.turn;

        self.last_move = Some(mv.record());
        self.history.push(token);
        self.turn = self.turn.next();
        self.status = self.evaluate_status();

        debug!(
            "{} played {} ({}, {:?}), status: {}",
            mover, token, mv, kind, self.status
        );
        if let Some(piece) = captured {
            debug!("{} {} captured on {}", piece.color, piece.kind.name(), mv.to);
        }

        Ok(MoveOutcome {
            token: token.to_string(),
            mv,
            kind,
            captured,
            status: self.status,
        })
    }

    /// Decide the special-move kind on the board as it stands before the move
    fn classify(&self, mv: Move) -> MoveKind {
        let Some(piece) = self.board.get(mv.from) else {
            return MoveKind::Normal;
        };

        match piece.kind {
            PieceKind::Pawn
                if en_passant_victim(&self.board, self.last_move, mv.from, mv.to).is_some() =>
            {
                MoveKind::EnPassant
            }
            PieceKind::Pawn if mv.from.row.abs_diff(mv.to.row) == 2 => MoveKind::DoublePawnPush,
            PieceKind::King if mv.is_castling_shape() => castling_side(&self.board, mv.from, mv.to)
                .map(MoveKind::Castle)
                .unwrap_or(MoveKind::Normal),
            _ => MoveKind::Normal,
        }
    }

    /// Mutate the board: side effects of special moves first, then the piece itself.
    /// Returns the captured piece, if any.
    fn apply(&mut self, mv: Move, kind: MoveKind) -> Option<Piece> {
        let mut captured = None;

        match kind {
            MoveKind::EnPassant => {
                let victim = Square::new_unchecked(mv.from.row, mv.to.col);
                captured = self.board.take(victim);
                debug!("en passant removes the pawn on {}", victim);
            }
            MoveKind::Castle(side) => {
                let row = mv.from.row;
                let rook_from = Square::new_unchecked(row, side.rook_col());
                let rook_to = Square::new_unchecked(row, side.king_transit_col());
                let rook = self.board.take(rook_from).map(|rook| rook.moved());
                self.board.set(rook_to, rook);
                debug!("{} moves the rook {} -> {}", side.notation(), rook_from, rook_to);
            }
            MoveKind::Normal | MoveKind::DoublePawnPush => {}
        }

        let piece = self.board.take(mv.from).map(|piece| piece.moved());
        captured = captured.or(self.board.get(mv.to));
        self.board.set(mv.to, piece);

        if let Some(piece) = piece {
            if piece.kind == PieceKind::King {
                self.kings.set(piece.color, mv.to);
            }
        }

        captured
    }

    fn evaluate_status(&self) -> GameStatus {
        let validator = self.validator();
        let king = self.kings.get(self.turn);
        let attackers = checkers(&self.board, self.turn, king);
        if !attackers.is_empty() {
            debug!("{} king on {} is attacked from {:?}", self.turn, king, attackers);
        }

        if validator.has_legal_move(self.turn) {
            GameStatus::InProgress
        } else if !attackers.is_empty() {
            GameStatus::Checkmate {
                winner: self.turn.next(),
            }
        } else {
            GameStatus::Stalemate
        }
    }

    /// Legality view of the current position
    pub fn validator(&self) -> Validator<'_> {
        Validator::new(&self.board, self.last_move, self.kings)
    }

    /// Check a coordinate move for the side to move without applying it
    pub fn validate(&self, from: Square, to: Square) -> Result<(), ChessError> {
        self.validator().validate(self.turn, from, to)
    }

    /// The side to move
    pub fn turn_color(&self) -> Color {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The side to move is in check and has no legal move
    pub fn is_checkmate(&self) -> bool {
        matches!(self.status, GameStatus::Checkmate { .. })
    }

    /// The side to move is not in check but has no legal move
    pub fn is_stalemate(&self) -> bool {
        self.status == GameStatus::Stalemate
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn is_in_check(&self) -> bool {
        self.validator().in_check(self.turn)
    }

    /// Legal moves for the side to move
    pub fn legal_moves(&self) -> Vec<Move> {
        self.validator().legal_moves(self.turn)
    }

    /// Read-only board snapshot
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn king_square(&self, color: Color) -> Square {
        self.kings.get(color)
    }

    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
