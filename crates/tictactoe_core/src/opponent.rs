//! The computer's move-selection heuristic.
//!
//! Priority order: complete our own line, block the human's line, take the
//! center, otherwise pick any empty square at random. Each line-based step
//! scans [`WINNING_LINES`] in declaration order and stops at the first hit,
//! so simultaneous threats are not ranked against each other.

use crate::rules::WINNING_LINES;
use crate::{Board, Marker, Player, Position};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Which rule produced the computer's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Tactic {
    /// Completes a computer line.
    #[display("win")]
    Win,
    /// Stops a human line.
    #[display("block")]
    Block,
    /// Takes the center square.
    #[display("center")]
    Center,
    /// Uniform pick among empty squares.
    #[display("random")]
    Random,
}

/// A chosen square together with the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_getters::Getters)]
pub struct Decision {
    /// Square to play.
    position: Position,
    /// Rule that picked it.
    tactic: Tactic,
}

/// Picks the computer's next square, or `None` on a full board.
pub fn choose_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    decide(board, rng).map(|decision| decision.position)
}

/// Like [`choose_move`], but also reports the rule that fired.
#[instrument(skip(rng), level = "debug")]
pub fn decide<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Decision> {
    let decision = if let Some(position) = line_completion(board, Player::Computer) {
        Decision { position, tactic: Tactic::Win }
    } else if let Some(position) = line_completion(board, Player::Human) {
        Decision { position, tactic: Tactic::Block }
    } else if board.is_empty(Position::Center) {
        Decision { position: Position::Center, tactic: Tactic::Center }
    } else {
        let position = *board.empty_squares().choose(rng)?;
        Decision { position, tactic: Tactic::Random }
    };

    debug!(square = %decision.position, tactic = %decision.tactic, "Computer chose square");
    Some(decision)
}

/// First line holding two of `player`'s markers and one empty square.
fn line_completion(board: &Board, player: Player) -> Option<Position> {
    let mine = Marker::from(player);
    WINNING_LINES.iter().find_map(|line| {
        let owned = line.iter().filter(|&&pos| board.get(pos) == mine).count();
        if owned == 2 {
            line.iter().copied().find(|&pos| board.is_empty(pos))
        } else {
            None
        }
    })
}
