//! Round status and terminal outcomes.

use crate::Player;
use serde::{Deserialize, Serialize};

/// Status of a round, derived from its board after every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Moves are still being made.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// The board filled up without a line.
    Draw,
}

impl RoundStatus {
    /// True while the round accepts moves.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, RoundStatus::InProgress)
    }

    /// The terminal outcome, or `None` while in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            RoundStatus::InProgress => None,
            RoundStatus::Won(player) => Some(Outcome::Winner(*player)),
            RoundStatus::Draw => Some(Outcome::Draw),
        }
    }
}

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the round.
    Winner(Player),
    /// Round ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }
}
