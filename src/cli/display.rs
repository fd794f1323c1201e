use crate::chess::{Board, Color, Game, GameStatus, Piece, Square};
use crate::cli::app::BoardStyle;

/// Render the board framed in box-drawing characters, from `perspective`'s side
pub fn render_board(board: &Board, perspective: Color, style: BoardStyle) -> String {
    let symbol = |piece: Option<Piece>| match (piece, style) {
        (Some(piece), BoardStyle::Unicode) => piece.glyph(),
        (Some(piece), BoardStyle::Ascii) => piece.letter(),
        (None, _) => ' ',
    };

    // Row 0 is rank 8, so White looks at rows in order and Black in reverse
    let (rows, cols): (Vec<u8>, Vec<u8>) = match perspective {
        Color::White => ((0..8).collect(), (0..8).collect()),
        Color::Black => ((0..8).rev().collect(), (0..8).rev().collect()),
    };

    let mut out = String::new();
    out.push_str("  ┌─┬─┬─┬─┬─┬─┬─┬─┐\n");

    for (i, &row) in rows.iter().enumerate() {
        let rank_number = 8 - row;
        out.push_str(&format!("{} │", rank_number));
        for &col in &cols {
            out.push(symbol(board.get(Square::new_unchecked(row, col))));
            out.push('│');
        }
        out.push_str(&format!(" {}\n", rank_number));

        if i < 7 {
            out.push_str("  ├─┼─┼─┼─┼─┼─┼─┼─┤\n");
        }
    }

    out.push_str("  └─┴─┴─┴─┴─┴─┴─┴─┘\n");
    let files: Vec<String> = cols
        .iter()
        .map(|&col| ((b'a' + col) as char).to_string())
        .collect();
    out.push_str(&format!("   {}", files.join(" ")));
    out
}

/// Move history as a table of numbered White/Black pairs
pub fn render_move_history(history: &[String]) -> String {
    if history.is_empty() {
        return "No moves in history.".to_string();
    }

    let mut out = String::new();
    out.push_str("┌──────┬─────────┬─────────┐\n");
    out.push_str("│ Move │  White  │  Black  │\n");
    out.push_str("├──────┼─────────┼─────────┤\n");

    for (i, move_pair) in history.chunks(2).enumerate() {
        let white_move = move_pair.first().map(|s| s.as_str()).unwrap_or("-");
        let black_move = move_pair.get(1).map(|s| s.as_str()).unwrap_or("-");
        out.push_str(&format!(
            "│ {:>4} │ {:^7} │ {:^7} │\n",
            i + 1,
            white_move,
            black_move
        ));
    }

    out.push_str("└──────┴─────────┴─────────┘");
    out
}

/// One-line summary of whose turn it is or how the game ended
pub fn render_status(game: &Game) -> String {
    match game.status() {
        GameStatus::InProgress if game.is_in_check() => {
            format!("{} to move (in check)", game.turn_color())
        }
        GameStatus::InProgress => format!("{} to move", game.turn_color()),
        GameStatus::Checkmate { winner } => {
            format!("{} was checkmated! {} wins.", winner.next(), winner)
        }
        GameStatus::Stalemate => format!("{} is stalemated. Draw.", game.turn_color()),
    }
}
