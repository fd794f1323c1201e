use anyhow::{Context, Result};
use clap::Parser;
use rookery::cli::{
    export_game, format_report, replay_file, run_session, Cli, Commands, Config,
};
use rookery::Game;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_or_create(path),
        None => Config::load_or_create_default(),
    }
    .context("Failed to initialize configuration")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Play { export } => {
            let mut game = Game::new();
            println!("Welcome to chess");

            let end = run_session(&mut game, io::stdin().lock(), io::stdout(), config.board_style)?;
            info!("Session ended: {:?}", end);

            let name = export.or_else(|| {
                config
                    .export_finished_games
                    .then(|| format!("game-{}", std::process::id()))
            });
            if let (Some(name), true) = (name, end.has_result()) {
                let path = config.export_path(&name);
                match export_game(&game, &path) {
                    Ok(()) => println!("Game saved to {}", path.display()),
                    Err(e) => error!("Could not export game: {:#}", e),
                }
            }
        }
        Commands::Replay { file, json } => {
            let reports = replay_file(&file)?;
            if json {
                let text = serde_json::to_string_pretty(&reports)
                    .context("Failed to serialize replay report")?;
                println!("{text}");
            } else {
                println!("{}", format_report(&reports));
            }
        }
        Commands::Config => {
            match &cli.config {
                Some(path) => println!("Config file: {}", path.display()),
                None => println!("Config file: {}", Config::default_config_file()?.display()),
            }
            let text = toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
            println!("{text}");
        }
    }

    Ok(())
}
