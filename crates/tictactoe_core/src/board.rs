//! The 3x3 grid and its mutation rules.

use crate::{BoardError, Marker, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// Every square always holds a [`Marker`]; squares are never added or
/// removed, only filled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (index 0 is square 1).
    squares: [Marker; 9],
}

impl Board {
    /// Creates a new board with every square empty.
    pub fn new() -> Self {
        Self {
            squares: [Marker::Empty; 9],
        }
    }

    /// Builds a board from explicit markers, square 1 first.
    pub fn from_markers(squares: [Marker; 9]) -> Self {
        Self { squares }
    }

    /// Returns the marker at the given position.
    pub fn get(&self, pos: Position) -> Marker {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Empty squares in ascending id order.
    pub fn empty_squares(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Places `player`'s marker on an empty square.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidMove`] if the square is occupied; the
    /// board is left untouched.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), BoardError> {
        if !self.is_empty(pos) {
            return Err(BoardError::InvalidMove(pos));
        }
        self.squares[pos.to_index()] = Marker::from(player);
        Ok(())
    }

    /// True once no empty square remains.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_squares(), Position::ALL.to_vec());
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_fills_square() {
        let mut board = Board::new();
        board.place(Position::Center, Player::Human).unwrap();
        assert_eq!(board.get(Position::Center), Marker::Human);
        assert_eq!(board.empty_squares().len(), 8);
        assert!(!board.empty_squares().contains(&Position::Center));
    }

    #[test]
    fn test_place_on_occupied_is_rejected_without_change() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::Computer).unwrap();
        let before = board.clone();

        let result = board.place(Position::TopLeft, Player::Human);

        assert_eq!(result, Err(BoardError::InvalidMove(Position::TopLeft)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_squares_ascending() {
        let mut board = Board::new();
        board.place(Position::BottomRight, Player::Human).unwrap();
        board.place(Position::TopCenter, Player::Computer).unwrap();
        let ids: Vec<u8> = board.empty_squares().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![1, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_full_iff_no_empty_squares() {
        let mut board = Board::new();
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert!(!board.is_full());
            let player = if i % 2 == 0 { Player::Human } else { Player::Computer };
            board.place(*pos, player).unwrap();
        }
        assert!(board.is_full());
        assert!(board.empty_squares().is_empty());
    }
}
