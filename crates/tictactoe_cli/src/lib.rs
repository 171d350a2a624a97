//! Console front-end for the tic-tac-toe match engine.
//!
//! Wires [`tictactoe_core`] to a terminal: settings from TOML and flags,
//! a replaceable message catalog, and a line-based [`Console`] that plays
//! the human's side.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod messages;
mod render;
mod session;

// Crate-level exports - Command line and settings
pub use cli::Cli;
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Terminal I/O
pub use console::Console;
pub use messages::{Messages, render as render_message};
pub use render::{board as render_board, join_or};

// Crate-level exports - Session loop
pub use session::run_session;
