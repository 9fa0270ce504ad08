//! Command-line interface for british_square.

use clap::Parser;
use std::path::PathBuf;

/// British Square - claim cells on a grid, never next to your opponent
#[derive(Parser, Debug)]
#[command(name = "british_square")]
#[command(about = "Two-player British Square on the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the game configuration file (defaults are used if it is missing)
    #[arg(short, long, default_value = "british_square.toml")]
    pub config: PathBuf,
}
