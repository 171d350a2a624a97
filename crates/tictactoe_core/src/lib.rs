//! Tic-tac-toe against a heuristic computer opponent, played as a match of
//! rounds until one side reaches a win threshold.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid and its placement rule
//! - **Rules**: win detection over the eight fixed lines, draw detection
//! - **Opponent**: win > block > center > random move selection
//! - **Round**: turn alternation over one board until a win or a draw
//! - **Match**: rounds accumulating a score until the threshold
//!
//! All I/O lives behind the traits in [`HumanInput`], [`DisplaySink`] and
//! [`MatchControl`].
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tictactoe_core::{Board, Player, Position, choose_move};
//!
//! let mut board = Board::new();
//! board.place(Position::TopLeft, Player::Computer).unwrap();
//! board.place(Position::TopCenter, Player::Computer).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! assert_eq!(choose_move(&board, &mut rng), Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod game_match;
mod interface;
mod phases;
mod position;
mod round;
mod types;

pub mod opponent;
pub mod rules;

// Crate-level exports - Board and squares
pub use board::Board;
pub use position::{ParsePositionError, Position};
pub use types::{Marker, Player};

// Crate-level exports - Rounds
pub use action::Move;
pub use phases::{Outcome, RoundStatus};
pub use round::Round;

// Crate-level exports - Matches
pub use game_match::{Match, MatchConfig, MatchResult, MatchStatus, Score, WINS_NEEDED};

// Crate-level exports - Rules and opponent
pub use opponent::{Decision, Tactic, choose_move};
pub use rules::{WINNING_LINES, detect_winner};

// Crate-level exports - Collaborator boundary
pub use interface::{DisplaySink, HumanInput, MatchControl, MatchIo, NextRound};

// Crate-level exports - Errors
pub use error::{BoardError, InputError, MatchConfigError, PlayError};
