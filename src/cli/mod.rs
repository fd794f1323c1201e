pub mod app;
pub mod commands;
pub mod display;
pub mod replay;
pub mod session;

pub use app::{export_game, BoardStyle, Config};
pub use commands::{Cli, Commands};
pub use display::{render_board, render_move_history, render_status};
pub use replay::{format_report, replay_file, replay_game, split_games, GameReport, ReplayFailure};
pub use session::{run_session, SessionEnd};
