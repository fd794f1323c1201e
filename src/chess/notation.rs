//! Short algebraic move tokens and their resolution to concrete squares.

use super::legality::Validator;
use super::moves::{CastleSide, Move};
use super::{ChessError, Color, PieceKind, Square};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::trace;

/// Accepted token shapes: pawn push, piece move, capture, file-disambiguated
/// piece move (plain and capturing), and both castles.
const GRAMMAR: &str = concat!(
    r"^(?:[a-h][1-8]",
    r"|[RNBQK][a-h][1-8]",
    r"|[RNBQKa-h]x[a-h][1-8]",
    r"|[RNBQK][a-h][a-h][1-8]",
    r"|[RNBQK][a-h]x[a-h][1-8]",
    r"|O-O",
    r"|O-O-O)$"
);

fn grammar() -> &'static Regex {
    static GRAMMAR_RE: OnceLock<Regex> = OnceLock::new();
    GRAMMAR_RE.get_or_init(|| Regex::new(GRAMMAR).expect("move grammar is a valid regex"))
}

/// A move token that matched the grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notation {
    Castle(CastleSide),
    Standard {
        kind: PieceKind,
        /// Source column named by the token: the disambiguating file of a piece
        /// move, or the file a pawn captures from
        from_col: Option<u8>,
        capture: bool,
        dest: Square,
    },
}

impl FromStr for Notation {
    type Err = ChessError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if !grammar().is_match(token) {
            return Err(ChessError::MalformedNotation(token.to_string()));
        }

        match token {
            "O-O" => return Ok(Notation::Castle(CastleSide::Kingside)),
            "O-O-O" => return Ok(Notation::Castle(CastleSide::Queenside)),
            _ => {}
        }

        // The grammar guarantees ASCII and a trailing file+rank pair
        let chars: Vec<char> = token.chars().collect();
        let (prefix, dest) = chars.split_at(chars.len() - 2);
        let dest = Square::from_chars(dest[0], dest[1])?;
        let capture = prefix.contains(&'x');

        let (kind, from_col) = match prefix.first() {
            None => (PieceKind::Pawn, None),
            Some(&letter) => match PieceKind::from_notation_letter(letter) {
                Some(kind) => (kind, prefix.get(1).and_then(|&c| Square::file_index(c))),
                None => (PieceKind::Pawn, Square::file_index(letter)),
            },
        };

        Ok(Notation::Standard {
            kind,
            from_col,
            capture,
            dest,
        })
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Castle(side) => write!(f, "{}", side.notation()),
            Notation::Standard {
                kind,
                from_col,
                capture,
                dest,
            } => {
                if *kind != PieceKind::Pawn {
                    write!(f, "{}", kind.symbol())?;
                }
                if let Some(col) = from_col {
                    write!(f, "{}", (b'a' + col) as char)?;
                }
                if *capture {
                    write!(f, "x")?;
                }
                write!(f, "{}", dest)
            }
        }
    }
}

impl Notation {
    /// Map the token to a concrete move for `color`. Performs no mutation.
    ///
    /// A castle is accepted only if the king can legally make both its one-step
    /// and its two-step move toward the rook. Any other token collects every
    /// piece of the named kind that can legally reach the destination and
    /// narrows by the named source file when there is more than one. A token
    /// marked with `x` must actually capture.
    pub fn resolve(&self, validator: &Validator<'_>, color: Color) -> Result<Move, ChessError> {
        match self {
            Notation::Castle(side) => resolve_castle(validator, color, *side),
            Notation::Standard {
                kind,
                from_col,
                capture,
                dest,
            } => resolve_standard(
                validator,
                color,
                *kind,
                *from_col,
                *capture,
                *dest,
                &self.to_string(),
            ),
        }
    }
}

fn resolve_castle(validator: &Validator<'_>, color: Color, side: CastleSide) -> Result<Move, ChessError> {
    let home = color.back_row();
    let king = Square::new_unchecked(home, 4);
    let transit = Square::new_unchecked(home, side.king_transit_col());
    let dest = Square::new_unchecked(home, side.king_dest_col());

    let on_home_square = validator
        .board()
        .get(king)
        .is_some_and(|p| p.is(PieceKind::King, color));

    let both_steps_legal = on_home_square
        && !validator.in_check(color)
        && validator.validate(color, king, transit).is_ok()
        && validator.validate(color, king, dest).is_ok();

    if both_steps_legal {
        Ok(Move::new(king, dest))
    } else {
        Err(ChessError::CastlingUnavailable(side.notation().to_string()))
    }
}

fn resolve_standard(
    validator: &Validator<'_>,
    color: Color,
    kind: PieceKind,
    from_col: Option<u8>,
    capture: bool,
    dest: Square,
    token: &str,
) -> Result<Move, ChessError> {
    // A pawn always stands on the file its token names: the capture file, or
    // the destination file for a push
    let pawn_file = from_col.unwrap_or(dest.col);

    let candidates: Vec<Square> = validator
        .board()
        .pieces()
        .filter(|(_, piece)| piece.is(kind, color))
        .map(|(square, _)| square)
        .filter(|square| kind != PieceKind::Pawn || square.col == pawn_file)
        .filter(|&square| validator.is_legal(color, square, dest).unwrap_or(false))
        .filter(|&square| !capture || validator.capture_square(square, dest).is_some())
        .collect();

    trace!(
        "{} candidates for {}: {:?}",
        candidates.len(),
        token,
        candidates
    );

    let from = match (candidates.as_slice(), from_col) {
        ([], _) => return Err(ChessError::NoLegalSource(token.to_string())),
        ([only], _) => *only,
        (_, None) => return Err(ChessError::AmbiguousSource(token.to_string())),
        (many, Some(col)) => {
            let on_file: Vec<Square> = many.iter().copied().filter(|s| s.col == col).collect();
            match on_file.as_slice() {
                [] => return Err(ChessError::NoLegalSource(token.to_string())),
                [only] => *only,
                _ => return Err(ChessError::AmbiguousSource(token.to_string())),
            }
        }
    };

    Ok(Move::new(from, dest))
}
