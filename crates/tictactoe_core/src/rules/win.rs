//! Win detection logic for tic-tac-toe.

use crate::{Board, Marker, Player, Position};
use tracing::instrument;

/// The eight lines that win when uniformly occupied.
///
/// Declaration order matters: rows, then columns, then diagonals. Both win
/// detection and the computer opponent take the first qualifying line.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first line (in [`WINNING_LINES`] order) whose
/// three squares hold the same marker, `None` otherwise.
#[instrument(level = "trace")]
pub fn detect_winner(board: &Board) -> Option<Player> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let marker = board.get(a);
        if marker != Marker::Empty && marker == board.get(b) && marker == board.get(c) {
            marker.owner()
        } else {
            None
        }
    })
}
