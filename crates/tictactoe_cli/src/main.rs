//! tictactoe - play tic-tac-toe matches against the computer.

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tictactoe_cli::{Cli, Console, GameConfig, Messages, run_session};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let config = GameConfig::resolve(&cli).context("Failed to load settings")?;
    debug!(?config, "Settings resolved");

    let messages = Messages::load(config.messages().as_deref()).context("Failed to load messages")?;

    let mut rng = match config.seed() {
        Some(seed) => {
            info!(seed, "Using seeded random source");
            StdRng::seed_from_u64(*seed)
        }
        None => StdRng::from_os_rng(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), messages, *config.clear_screen());

    let results = run_session(&mut console, &config, &mut rng).context("Game aborted")?;
    info!(matches = results.len(), "Exiting");
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("warn,tictactoe=info,tictactoe_core=info,tictactoe_cli=info")
        }))
        .with_writer(io::stderr)
        .init();
}
