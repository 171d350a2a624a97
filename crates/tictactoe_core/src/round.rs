//! One round: an empty board played out to a win or a draw.

use crate::interface::HumanInput;
use crate::{Board, Move, Outcome, PlayError, Player, Position, RoundStatus, opponent, rules};
use derive_getters::Getters;
use rand::Rng;
use tracing::{debug, instrument};

/// State of a single round.
///
/// The player to move is an explicit field, alternated only by
/// [`Round::apply`] while the round is in progress.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Round {
    /// The board.
    board: Board,
    /// Player whose turn it is (the last mover once the round is over).
    to_move: Player,
    /// Derived status after the last move.
    status: RoundStatus,
    /// Moves played so far, oldest first.
    history: Vec<Move>,
}

impl Round {
    /// Starts a round on an empty board.
    #[instrument]
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            status: RoundStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// The most recent move, if any.
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// The terminal outcome, or `None` while in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        self.status.outcome()
    }

    /// Places the active player's marker and advances the state machine.
    ///
    /// # Errors
    ///
    /// - [`PlayError::RoundOver`] if the round already ended.
    /// - [`PlayError::InvalidMove`] if the square is occupied; the round is
    ///   left unchanged.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply(&mut self, pos: Position) -> Result<RoundStatus, PlayError> {
        if !self.status.is_in_progress() {
            return Err(PlayError::RoundOver);
        }

        let player = self.to_move;
        self.board.place(pos, player)?;
        self.history.push(Move::new(player, pos));

        self.status = rules::evaluate(&self.board);
        if self.status.is_in_progress() {
            self.to_move = player.opponent();
        } else {
            debug!(status = ?self.status, moves = self.history.len(), "Round finished");
        }

        Ok(self.status)
    }

    /// Plays one turn: asks the active player for a square and applies it.
    ///
    /// The human's square comes from `human`; the computer's from
    /// [`opponent::choose_move`] using `rng`.
    #[instrument(skip_all, fields(player = %self.to_move))]
    pub fn take_turn<H, R>(&mut self, human: &mut H, rng: &mut R) -> Result<Move, PlayError>
    where
        H: HumanInput + ?Sized,
        R: Rng + ?Sized,
    {
        if !self.status.is_in_progress() {
            return Err(PlayError::RoundOver);
        }

        let player = self.to_move;
        let pos = match player {
            Player::Human => human.choose_square(&self.board)?,
            Player::Computer => {
                opponent::choose_move(&self.board, rng).ok_or(PlayError::NoEmptySquare)?
            }
        };

        self.apply(pos)?;
        Ok(Move::new(player, pos))
    }

    /// Plays turns until the round ends.
    pub fn play<H, R>(&mut self, human: &mut H, rng: &mut R) -> Result<Outcome, PlayError>
    where
        H: HumanInput + ?Sized,
        R: Rng + ?Sized,
    {
        loop {
            if let Some(outcome) = self.outcome() {
                return Ok(outcome);
            }
            self.take_turn(human, rng)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round() {
        let round = Round::new(Player::Computer);
        assert_eq!(*round.to_move(), Player::Computer);
        assert_eq!(*round.status(), RoundStatus::InProgress);
        assert!(round.history().is_empty());
        assert_eq!(round.last_move(), None);
    }

    #[test]
    fn test_apply_alternates() {
        let mut round = Round::new(Player::Human);
        round.apply(Position::Center).unwrap();
        assert_eq!(*round.to_move(), Player::Computer);
        round.apply(Position::TopLeft).unwrap();
        assert_eq!(*round.to_move(), Player::Human);
        assert_eq!(
            round.last_move(),
            Some(&Move::new(Player::Computer, Position::TopLeft))
        );
    }

    #[test]
    fn test_apply_occupied_leaves_round_unchanged() {
        let mut round = Round::new(Player::Human);
        round.apply(Position::Center).unwrap();
        let before = round.clone();

        let err = round.apply(Position::Center).unwrap_err();

        assert!(matches!(err, PlayError::InvalidMove(_)));
        assert_eq!(round, before);
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut round = Round::new(Player::Human);
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            round.apply(pos).unwrap();
        }
        assert_eq!(*round.status(), RoundStatus::Won(Player::Human));
        assert_eq!(*round.to_move(), Player::Human);
        assert_eq!(round.apply(Position::BottomLeft), Err(PlayError::RoundOver));
    }
}
