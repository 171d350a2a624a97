//! Error types for board mutation and round play.

use crate::Position;
use derive_more::{Display, Error, From};
use tracing::instrument;

/// Error raised by [`Board::place`](crate::Board::place).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The target square already holds a marker.
    #[display("Invalid move: square {} is already occupied", _0)]
    InvalidMove(#[error(not(source))] Position),
}

/// Rejected [`MatchConfig`](crate::MatchConfig) settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MatchConfigError {
    /// A threshold of zero could never be reached.
    #[display("wins_needed must be at least 1")]
    ZeroWinsNeeded,
}

/// Failure reported by an external collaborator (input source or match control).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Input error: {} at {}:{}", message, file, line)]
pub struct InputError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InputError {
    /// Creates a new input error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for InputError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// Error that aborts a turn, a round, or a whole match.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum PlayError {
    /// A collaborator asked for an occupied square.
    #[display("{}", _0)]
    InvalidMove(BoardError),

    /// A turn was requested after the round reached a terminal state.
    #[display("Round is already over")]
    #[from(ignore)]
    RoundOver,

    /// The computer was asked to move on a board with no empty square.
    #[display("No empty square left to play")]
    #[from(ignore)]
    NoEmptySquare,

    /// A collaborator failed to supply a decision.
    #[display("{}", _0)]
    Input(InputError),

    /// The match settings were rejected before play.
    #[display("{}", _0)]
    Config(MatchConfigError),
}
