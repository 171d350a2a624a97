//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the round, the opponent and the tests can share them.

pub mod draw;
pub mod win;

pub use draw::evaluate;
pub use win::{WINNING_LINES, detect_winner};
