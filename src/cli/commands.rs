use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rookery")]
#[command(about = "A chess rules engine driven by short algebraic notation")]
pub struct Cli {
    /// Use this configuration file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play a game at the terminal
    ///
    /// Enter moves in short algebraic notation. Type 'resign' to give up,
    /// 'moves' to list legal moves, or 'quit' to leave without a result.
    ///
    /// Examples:
    ///   rookery play
    ///   rookery play --export my-game
    Play {
        /// Name of the file (without extension) the finished game is written to
        #[arg(short, long)]
        export: Option<String>,
    },

    /// Replay recorded games and report the ones the engine rejects
    ///
    /// Games are separated by blank lines. Header lines in square brackets,
    /// move numbers, check marks and result markers are ignored.
    ///
    /// Examples:
    ///   rookery replay games.pgn
    ///   rookery replay games.pgn --json
    Replay {
        /// File holding the recorded games
        file: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the configuration file location and its values
    Config,
}
