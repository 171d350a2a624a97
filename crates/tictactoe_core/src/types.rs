//! Core domain types: who is playing and what occupies a square.

use serde::{Deserialize, Serialize};

/// One of the two seats at the table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// The person at the keyboard.
    #[display("Player")]
    #[strum(serialize = "player", serialize = "human")]
    Human,
    /// The heuristic opponent.
    #[display("Computer")]
    #[strum(serialize = "computer")]
    Computer,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

/// Occupant of a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Marker {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Holds the human's mark.
    Human,
    /// Holds the computer's mark.
    Computer,
}

impl Marker {
    /// Returns the player owning this marker, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Marker::Empty => None,
            Marker::Human => Some(Player::Human),
            Marker::Computer => Some(Player::Computer),
        }
    }

    /// True for [`Marker::Empty`].
    pub fn is_empty(self) -> bool {
        self == Marker::Empty
    }
}

impl From<Player> for Marker {
    fn from(player: Player) -> Self {
        match player {
            Player::Human => Marker::Human,
            Player::Computer => Marker::Computer,
        }
    }
}
