//! Command-line interface for the tictactoe binary.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_core::Player;

/// Tic Tac Toe against the computer, first to N round wins
#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe matches against a heuristic computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Round wins needed to take the match
    #[arg(short, long)]
    pub wins_needed: Option<u32>,

    /// Seed for the computer's random tie-break (reproducible games)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Who moves first in every round (player or computer); asked if omitted
    #[arg(long)]
    pub first: Option<Player>,

    /// Path to a TOML message catalog replacing the built-in text
    #[arg(long)]
    pub messages: Option<PathBuf>,

    /// Do not clear the terminal before drawing the board
    #[arg(long)]
    pub no_clear: bool,
}
