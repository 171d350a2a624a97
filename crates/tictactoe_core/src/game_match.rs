//! A match: rounds played until someone reaches the win threshold.

use crate::interface::{MatchIo, NextRound};
use crate::{MatchConfigError, Outcome, PlayError, Player, Round};
use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Round wins needed to take the match.
pub const WINS_NEEDED: u32 = 5;

/// Round wins per player. Tallies only ever go up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Score {
    /// Rounds won by the human.
    human: u32,
    /// Rounds won by the computer.
    computer: u32,
}

impl Score {
    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::Human => self.human,
            Player::Computer => self.computer,
        }
    }

    /// Player with strictly more wins, `None` when level.
    pub fn leader(&self) -> Option<Player> {
        match self.human.cmp(&self.computer) {
            std::cmp::Ordering::Greater => Some(Player::Human),
            std::cmp::Ordering::Less => Some(Player::Computer),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Adds a round win for `player`.
    fn record_win(&mut self, player: Player) {
        match player {
            Player::Human => self.human += 1,
            Player::Computer => self.computer += 1,
        }
    }
}

/// Fixed settings for one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct MatchConfig {
    /// Who moves first in every round.
    first: Player,
    /// Round wins that end the match, never zero.
    wins_needed: u32,
}

impl MatchConfig {
    /// Creates match settings.
    ///
    /// # Errors
    ///
    /// Returns [`MatchConfigError::ZeroWinsNeeded`] for a threshold of 0,
    /// which no tally could ever reach.
    pub fn new(first: Player, wins_needed: u32) -> Result<Self, MatchConfigError> {
        if wins_needed == 0 {
            return Err(MatchConfigError::ZeroWinsNeeded);
        }
        Ok(Self { first, wins_needed })
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            first: Player::Human,
            wins_needed: WINS_NEEDED,
        }
    }
}

/// Whether the match continues after a scored round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchStatus {
    /// Nobody has reached the threshold yet.
    Ongoing,
    /// `Player` reached the threshold.
    Won(Player),
}

/// Final state of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MatchResult {
    /// Tallies when the match ended.
    score: Score,
    /// Player who reached the threshold, `None` if the match was stopped early.
    grand_winner: Option<Player>,
    /// Rounds played, draws included.
    rounds_played: u32,
}

/// A sequence of rounds sharing one score.
///
/// The random source drives the computer's tie-break; inject a seeded
/// generator for reproducible play.
#[derive(Debug)]
pub struct Match<R> {
    config: MatchConfig,
    score: Score,
    rounds_played: u32,
    status: MatchStatus,
    rng: R,
}

impl<R: Rng> Match<R> {
    /// Creates a match with zeroed tallies.
    #[instrument(skip(rng))]
    pub fn new(config: MatchConfig, rng: R) -> Self {
        Self {
            config,
            score: Score::default(),
            rounds_played: 0,
            status: MatchStatus::Ongoing,
            rng,
        }
    }

    /// Current tallies.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Settings this match was created with.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Whether someone has reached the threshold.
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Rounds scored so far.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Scores a finished round.
    ///
    /// A win adds one to the winner's tally and ends the match when that
    /// tally reaches the threshold; a draw only counts the round. Once the
    /// match is won further outcomes are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) -> MatchStatus {
        if let MatchStatus::Won(_) = self.status {
            return self.status;
        }

        self.rounds_played += 1;
        if let Outcome::Winner(player) = outcome {
            self.score.record_win(player);
            debug!(%player, wins = self.score.wins(player), "Round win recorded");
            if self.score.wins(player) == self.config.wins_needed {
                self.status = MatchStatus::Won(player);
            }
        }
        self.status
    }

    /// Snapshot of the match as it stands.
    pub fn result(&self) -> MatchResult {
        MatchResult {
            score: self.score,
            grand_winner: match self.status {
                MatchStatus::Won(player) => Some(player),
                MatchStatus::Ongoing => None,
            },
            rounds_played: self.rounds_played,
        }
    }

    /// Plays one round to completion, reporting progress to `io`.
    #[instrument(skip_all, fields(round = self.rounds_played + 1))]
    pub fn play_round<I: MatchIo + ?Sized>(&mut self, io: &mut I) -> Result<Outcome, PlayError> {
        let mut round = Round::new(self.config.first);
        let outcome = loop {
            if let Some(outcome) = round.outcome() {
                break outcome;
            }
            io.show_turn(&round, &self.score);
            let mv = round.take_turn(io, &mut self.rng)?;
            io.show_move(&mv, &round);
        };

        self.record(outcome);
        io.show_round_result(&round, outcome, &self.score);
        Ok(outcome)
    }

    /// Plays rounds until someone reaches the threshold or `io` stops the match.
    ///
    /// # Errors
    ///
    /// Propagates any [`PlayError`] from a round or from `io`; the score
    /// reflects every round completed before the failure.
    #[instrument(skip_all, fields(first = %self.config.first, wins_needed = self.config.wins_needed))]
    pub fn run<I: MatchIo + ?Sized>(&mut self, io: &mut I) -> Result<MatchResult, PlayError> {
        info!("Match started");
        loop {
            self.play_round(io)?;
            if let MatchStatus::Won(player) = self.status {
                info!(%player, rounds = self.rounds_played, "Grand winner");
                break;
            }
            if io.next_round(&self.score)? == NextRound::Stop {
                info!(rounds = self.rounds_played, "Match stopped before threshold");
                break;
            }
        }

        let result = self.result();
        io.show_match_result(&result);
        Ok(result)
    }
}
