//! Strictly Grid - console game
//!
//! Wires stdin/stdout to the game state machine.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use strictly_grid::{Board, GameState};
use strictly_grid_console::{ConsoleSession, GameConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::load(&cli.config)?
        .with_env(|key| std::env::var(key).ok())?
        .with_overrides(cli.size, cli.diagonals);
    info!(?config, "Starting Strictly Grid");

    // Reject a bad size before asking anyone for their name.
    Board::new(*config.board_size())?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = ConsoleSession::new(stdin.lock(), stdout.lock());

    let players = match config.seated_players()? {
        Some(players) => players,
        None => session.register_players()?,
    };

    let mut game =
        GameState::initialize_with_rule(*config.board_size(), players, *config.diagonal_rule())?;
    let outcome = session.play(&mut game)?;

    info!(%outcome, moves = game.history().len(), "Session finished");
    Ok(())
}
