//! Game settings from a TOML file, overridden by command-line flags.

use crate::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_core::{Player, WINS_NEEDED};
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Round wins needed to take a match.
    #[serde(default = "default_wins_needed")]
    wins_needed: u32,

    /// Seed for the computer's tie-break; random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Fixed first player; asked before every match when absent.
    #[serde(default)]
    first: Option<Player>,

    /// Message catalog replacing the built-in text.
    #[serde(default)]
    messages: Option<PathBuf>,

    /// Clear the terminal before drawing the board.
    #[serde(default = "default_clear_screen")]
    clear_screen: bool,
}

fn default_wins_needed() -> u32 {
    WINS_NEEDED
}

fn default_clear_screen() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            wins_needed: default_wins_needed(),
            seed: None,
            first: None,
            messages: None,
            clear_screen: default_clear_screen(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config: {}", e))
        })?;

        config.validate()?;
        info!(wins_needed = config.wins_needed, "Config loaded successfully");
        Ok(config)
    }

    /// Builds the effective settings for a command line.
    ///
    /// The settings file is optional; a missing file means defaults. Flags
    /// given on the command line win over the file.
    #[instrument(skip(cli), fields(config = %cli.config.display()))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = if cli.config.exists() {
            Self::from_file(&cli.config)?
        } else {
            debug!("Config file not found, using defaults");
            Self::default()
        };

        if let Some(wins_needed) = cli.wins_needed {
            config.wins_needed = wins_needed;
        }
        if let Some(seed) = cli.seed {
            config.seed = Some(seed);
        }
        if let Some(first) = cli.first {
            config.first = Some(first);
        }
        if let Some(messages) = &cli.messages {
            config.messages = Some(messages.clone());
        }
        if cli.no_clear {
            config.clear_screen = false;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.wins_needed == 0 {
            return Err(ConfigError::new("wins_needed must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cli_with(config: &Path) -> Cli {
        Cli {
            config: config.to_path_buf(),
            ..Cli::default()
        }
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::resolve(&cli_with(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(*config.wins_needed(), 5);
        assert!(*config.clear_screen());
    }

    #[test]
    fn test_file_values_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "wins_needed = 3\nseed = 42\nfirst = \"computer\"\nclear_screen = false").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();

        assert_eq!(*config.wins_needed(), 3);
        assert_eq!(*config.seed(), Some(42));
        assert_eq!(*config.first(), Some(Player::Computer));
        assert!(!*config.clear_screen());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "wins_needed = 3\nfirst = \"computer\"").unwrap();
        let cli = Cli {
            wins_needed: Some(7),
            first: Some(Player::Human),
            no_clear: true,
            ..cli_with(file.path())
        };

        let config = GameConfig::resolve(&cli).unwrap();

        assert_eq!(*config.wins_needed(), 7);
        assert_eq!(*config.first(), Some(Player::Human));
        assert!(!*config.clear_screen());
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            wins_needed: Some(0),
            ..cli_with(&dir.path().join("absent.toml"))
        };
        let err = GameConfig::resolve(&cli).unwrap_err();
        assert!(err.message.contains("wins_needed"));
    }

    #[test]
    fn test_malformed_file_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "wins_needed = \"many\"").unwrap();
        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}
