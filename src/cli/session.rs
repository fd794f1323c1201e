use crate::chess::{Color, Game, GameStatus};
use crate::cli::app::BoardStyle;
use crate::cli::display::{render_board, render_move_history, render_status};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The engine concluded the game
    Finished(GameStatus),
    /// The given side resigned
    Resigned(Color),
    /// The player quit or input ran out before the game ended
    Abandoned,
}

impl SessionEnd {
    /// Whether the game reached a result worth exporting
    pub fn has_result(&self) -> bool {
        !matches!(self, SessionEnd::Abandoned)
    }
}

/// Interactive read/print loop over any line source and sink.
///
/// Rejected moves are reported and the player is prompted again; the engine
/// guarantees the game is unchanged by a rejection.
pub fn run_session<R: BufRead, W: Write>(
    game: &mut Game,
    input: R,
    mut output: W,
    style: BoardStyle,
) -> Result<SessionEnd> {
    let mut lines = input.lines();

    loop {
        if game.is_game_over() {
            writeln!(output, "\n{}", render_board(game.board(), Color::White, style))?;
            writeln!(output, "{}", render_status(game))?;
            return Ok(SessionEnd::Finished(game.status()));
        }

        let turn = game.turn_color();
        writeln!(output, "\n{} TURN!", turn.to_string().to_uppercase())?;
        writeln!(output, "{}", render_board(game.board(), Color::White, style))?;
        write!(output, "Enter Move: ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            debug!("Input closed before the game ended");
            return Ok(SessionEnd::Abandoned);
        };
        let line = line?;

        match line.trim() {
            "" => continue,
            "quit" | "exit" => return Ok(SessionEnd::Abandoned),
            "resign" => {
                writeln!(output, "{} resigns. {} wins.", turn, turn.next())?;
                return Ok(SessionEnd::Resigned(turn));
            }
            "history" => {
                writeln!(output, "{}", render_move_history(game.history().as_slice()))?;
            }
            "moves" => {
                let moves: Vec<String> = game.legal_moves().iter().map(|m| m.to_string()).collect();
                writeln!(output, "Legal moves: {}", moves.join(" "))?;
            }
            token => {
                if let Err(e) = game.make_move(token) {
                    warn!("Rejected move '{}': {}", token, e.category());
                    writeln!(output, "{}", e)?;
                }
            }
        }
    }
}
