use super::{ChessError, Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 8x8 grid of optional pieces.
///
/// A pure container: no move validation happens here. The type is `Copy`, so
/// hypothetical positions are built by copying the value and editing the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// squares[row][col] where row 0 = rank 8, col 0 = file a
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Create a new board with the standard starting position
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.reset_to_starting_position();
        board
    }

    /// A board with no pieces on it
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row as usize][square.col as usize] = piece;
    }

    /// Remove and return the piece on `square`
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize].take()
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Set up the standard chess starting position
    pub fn reset_to_starting_position(&mut self) {
        self.squares = [[None; 8]; 8];

        for color in [Color::White, Color::Black] {
            let back = color.back_row() as usize;
            let pawns = color.pawn_row() as usize;
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                self.squares[back][col] = Some(Piece::new(kind, color));
                self.squares[pawns][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
    }

    /// Every occupied square with its piece, row by row from row 0
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }

    /// Locate the king of `color` by scanning the board
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.is(PieceKind::King, color))
            .map(|(square, _)| square)
    }

    /// Build a board from the piece-placement field of a FEN string,
    /// e.g. `"rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR"`.
    ///
    /// Pieces are placed as unmoved.
    pub fn from_placement(placement: &str) -> Result<Board, ChessError> {
        let placement = placement.trim();
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            let found = rows.len();
            return Err(ChessError::InvalidPlacement(format!(
                "expected 8 ranks separated by '/', found {found}"
            )));
        }

        let mut board = Board::empty();
        for (row, text) in rows.iter().enumerate() {
            let rank = 8 - row;
            let mut col = 0usize;

            for c in text.chars() {
                if col >= 8 {
                    return Err(ChessError::InvalidPlacement(format!(
                        "rank {rank} has more than 8 squares"
                    )));
                }

                if let Some(empty) = c.to_digit(10) {
                    if empty == 0 || col + empty as usize > 8 {
                        return Err(ChessError::InvalidPlacement(format!(
                            "empty square count '{c}' does not fit rank {rank}"
                        )));
                    }
                    col += empty as usize;
                } else {
                    let piece = Self::char_to_piece(c).ok_or_else(|| {
                        ChessError::InvalidPlacement(format!(
                            "invalid piece character '{c}' in rank {rank} (valid pieces: KQRBNPkqrbnp)"
                        ))
                    })?;
                    board.squares[row][col] = Some(piece);
                    col += 1;
                }
            }

            if col != 8 {
                return Err(ChessError::InvalidPlacement(format!(
                    "rank {rank} must represent exactly 8 squares, found {col}"
                )));
            }
        }

        Ok(board)
    }

    /// Piece-placement field of FEN, rank 8 first
    pub fn to_placement(&self) -> String {
        let mut rows = Vec::with_capacity(8);

        for row in &self.squares {
            let mut text = String::new();
            let mut empty_count = 0;

            for square in row {
                match square {
                    Some(piece) => {
                        if empty_count > 0 {
                            text.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        text.push(piece.letter());
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                text.push_str(&empty_count.to_string());
            }
            rows.push(text);
        }

        rows.join("/")
    }

    fn char_to_piece(c: char) -> Option<Piece> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_uppercase() {
            'P' => PieceKind::Pawn,
            other => PieceKind::from_notation_letter(other)?,
        };
        Some(Piece::new(kind, color))
    }

    /// Display the board as ASCII art from White's perspective
    /// Shows rank 8 at the top, rank 1 at the bottom
    pub fn to_ascii(&self) -> String {
        let mut result = String::new();

        result.push_str("  a b c d e f g h\n");

        for (row, squares) in self.squares.iter().enumerate() {
            let rank_number = 8 - row;
            result.push_str(&format!("{rank_number} "));

            let cells: Vec<String> = squares
                .iter()
                .map(|square| match square {
                    Some(piece) => piece.to_string(),
                    None => ".".to_string(),
                })
                .collect();
            result.push_str(&cells.join(" "));

            result.push_str(&format!(" {rank_number}\n"));
        }

        result.push_str("  a b c d e f g h");
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
