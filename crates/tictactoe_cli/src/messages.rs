//! Message catalog for everything the console prints.

use crate::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Catalog compiled into the binary.
const BUILTIN: &str = include_str!("messages.toml");

/// User-facing text, loaded from TOML.
///
/// Entries may contain `{name}` placeholders, filled with [`render`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Messages {
    /// Greeting shown once at startup.
    intro: String,
    /// First rule line.
    rule_one: String,
    /// Second rule line.
    rule_two: String,
    /// Third rule line; `{wins_needed}`.
    rule_three: String,
    /// Asks who moves first.
    choose_first: String,
    /// Rejects an unknown first-player answer.
    invalid_first: String,
    /// Marker legend above the board; `{human}`, `{computer}`.
    legend: String,
    /// Square prompt; `{squares}`.
    choose_square: String,
    /// Rejects a square that is not open.
    invalid_square: String,
    /// Final conjunction in square lists.
    or_word: String,
    /// Announces the computer's move; `{square}`.
    computer_move: String,
    /// Round winner; `{winner}`.
    round_won: String,
    /// Drawn round.
    tie: String,
    /// Score line; `{human}`, `{computer}`.
    score: String,
    /// Match winner; `{winner}`.
    grand_winner: String,
    /// Asks whether to play another round.
    next_round: String,
    /// Rejects a bad next-round answer.
    invalid_next: String,
    /// Asks whether to start a new match.
    play_again: String,
    /// Rejects a bad play-again answer.
    invalid_again: String,
    /// Goodbye.
    thanks: String,
}

impl Messages {
    /// The catalog shipped with the binary.
    #[instrument]
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::parse(BUILTIN)
    }

    /// Parses a catalog from TOML text.
    #[instrument(skip(content))]
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse messages: {}", e)))
    }

    /// Loads a catalog from `path`, or the built-in one when `None`.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            debug!("Using built-in messages");
            return Self::builtin();
        };

        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!("Failed to read messages file {}: {}", path.display(), e))
        })?;
        let messages = Self::parse(&content)?;
        info!(path = %path.display(), "Messages loaded");
        Ok(messages)
    }
}

/// Fills `{name}` placeholders in `template`.
///
/// Unknown placeholders are left as they are.
pub fn render(template: &str, vars: &[(&str, String)]) -> String {
    vars.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{}}}", name), value)
    })
}
