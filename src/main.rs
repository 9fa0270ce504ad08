//! British Square - console game.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use british_square::{ConsoleInput, GameConfig, GameState, Session};
use clap::Parser;
use cli::Cli;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Loading {}", cli.config.display()))?;
    let state = GameState::new(config.dimensions()?);

    let stdin = std::io::stdin();
    let input = ConsoleInput::new("console", stdin.lock());
    let mut session = Session::new(state, input, std::io::stdout(), config.prompt().as_str());

    info!("Game ready");
    match session.run() {
        Ok(never) => match never {},
        Err(e) => Err(e.into()),
    }
}

/// Logs go to stderr so they never interleave with the board.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
