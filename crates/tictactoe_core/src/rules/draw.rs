//! Round status evaluation: win, draw or still in progress.

use super::win::detect_winner;
use crate::{Board, RoundStatus};
use tracing::instrument;

/// Derives the round status from the board alone.
///
/// A winner takes precedence over a full board, so a last move that both
/// completes a line and fills the grid is a win.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> RoundStatus {
    if let Some(winner) = detect_winner(board) {
        RoundStatus::Won(winner)
    } else if board.is_full() {
        RoundStatus::Draw
    } else {
        RoundStatus::InProgress
    }
}
