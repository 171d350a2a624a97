//! Boundary traits for the collaborators a match talks to.
//!
//! The engine never reads input or formats text. A front-end supplies the
//! human's moves, renders what the engine reports, and decides whether to
//! keep playing.

use crate::{Board, InputError, MatchResult, Move, Outcome, Position, Round, Score};

/// Source of the human's moves.
pub trait HumanInput {
    /// Returns a currently empty square for the human to play.
    ///
    /// Re-prompting on bad input is the implementor's job; the engine
    /// treats an occupied square as a fatal contract violation.
    fn choose_square(&mut self, board: &Board) -> Result<Position, InputError>;
}

/// Receives game state for presentation. Every hook defaults to a no-op.
pub trait DisplaySink {
    /// Called before each turn with the board as it stands.
    fn show_turn(&mut self, _round: &Round, _score: &Score) {}

    /// Called after a move has been applied.
    fn show_move(&mut self, _mv: &Move, _round: &Round) {}

    /// Called once a round reaches a terminal state, after scoring.
    fn show_round_result(&mut self, _round: &Round, _outcome: Outcome, _score: &Score) {}

    /// Called when the match ends.
    fn show_match_result(&mut self, _result: &MatchResult) {}
}

/// Whether to start another round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NextRound {
    /// Play another round.
    Continue,
    /// End the match without a grand winner.
    Stop,
}

/// Decides between rounds.
pub trait MatchControl {
    /// Asked after every round that did not end the match.
    fn next_round(&mut self, score: &Score) -> Result<NextRound, InputError>;
}

/// Everything [`Match::run`](crate::Match::run) needs from a front-end.
pub trait MatchIo: HumanInput + DisplaySink + MatchControl {}

impl<T: HumanInput + DisplaySink + MatchControl> MatchIo for T {}
