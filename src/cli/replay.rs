use crate::chess::{parse_movetext, Game, GameStatus};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Why a recorded game was rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayFailure {
    /// 1-based ply of the rejected token
    pub ply: usize,
    pub token: String,
    pub category: String,
    pub message: String,
}

/// Outcome of replaying one recorded game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameReport {
    /// 1-based position of the game in the file
    pub index: usize,
    /// Plies applied before the game ended or failed
    pub plies: usize,
    pub status: GameStatus,
    pub failure: Option<ReplayFailure>,
}

impl GameReport {
    pub fn is_valid(&self) -> bool {
        self.failure.is_none()
    }
}

/// Split a file of recorded games into movetext blocks.
///
/// Games are separated by blank lines; `[Tag "value"]` header lines are skipped.
pub fn split_games(text: &str) -> Vec<String> {
    let mut games = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        let line = line.trim();
        if line.starts_with('[') {
            continue;
        }
        if line.is_empty() {
            if !current.trim().is_empty() {
                games.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push_str(line);
        current.push(' ');
    }

    if !current.trim().is_empty() {
        games.push(current);
    }

    games
}

/// Replay one game's movetext, stopping at the first rejected token
pub fn replay_game(index: usize, movetext: &str) -> GameReport {
    let mut game = Game::new();

    for (ply, token) in parse_movetext(movetext).iter().enumerate() {
        if let Err(e) = game.make_move(token) {
            debug!(
                "Game {} rejected at ply {} ({}): {}\n{}",
                index,
                ply + 1,
                token,
                e,
                game.board().to_ascii()
            );
            return GameReport {
                index,
                plies: ply,
                status: game.status(),
                failure: Some(ReplayFailure {
                    ply: ply + 1,
                    token: token.clone(),
                    category: e.category().to_string(),
                    message: e.to_string(),
                }),
            };
        }
    }

    GameReport {
        index,
        plies: game.history().len(),
        status: game.status(),
        failure: None,
    }
}

/// Replay every game recorded in `path`
pub fn replay_file(path: &Path) -> Result<Vec<GameReport>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read games file: {}", path.display()))?;

    let reports: Vec<GameReport> = split_games(&text)
        .iter()
        .enumerate()
        .map(|(i, movetext)| replay_game(i + 1, movetext))
        .collect();

    let rejected = reports.iter().filter(|r| !r.is_valid()).count();
    info!(
        "Replayed {} games from {}, {} rejected",
        reports.len(),
        path.display(),
        rejected
    );

    Ok(reports)
}

/// Human-readable lines for the rejected games only
pub fn format_report(reports: &[GameReport]) -> String {
    let mut lines: Vec<String> = reports
        .iter()
        .filter_map(|report| {
            report.failure.as_ref().map(|f| {
                format!(
                    "Game {}: ply {} '{}' rejected ({}): {}",
                    report.index, f.ply, f.token, f.category, f.message
                )
            })
        })
        .collect();

    let rejected = lines.len();
    lines.push(format!(
        "{} of {} games replayed cleanly",
        reports.len() - rejected,
        reports.len()
    ));
    lines.join("\n")
}
