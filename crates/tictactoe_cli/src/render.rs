//! Plain-text rendering of the board and square lists.

use std::fmt::Display;
use tictactoe_core::{Board, Marker, Player, Position};

/// Character drawn for a marker.
pub fn symbol(marker: Marker) -> char {
    match marker {
        Marker::Empty => ' ',
        Marker::Human => 'X',
        Marker::Computer => 'O',
    }
}

/// Character drawn for a player's marker.
pub fn player_symbol(player: Player) -> char {
    symbol(Marker::from(player))
}

/// Draws the board as a 3x3 grid of padded cells.
pub fn board(board: &Board) -> String {
    let spacer = "     |     |\n";
    let mut out = String::new();
    for (row, squares) in Position::ALL.chunks(3).enumerate() {
        if row > 0 {
            out.push_str("-----+-----+-----\n");
        }
        out.push_str(spacer);
        let cells: Vec<String> = squares
            .iter()
            .map(|&pos| format!("  {}  ", symbol(board.get(pos))))
            .collect();
        out.push_str(cells.join("|").trim_end());
        out.push('\n');
        out.push_str(spacer);
    }
    out
}

/// Joins items as an English list: `1, 2, or 3`.
///
/// Two items are joined with just the word (`1 or 2`); one item is returned
/// as is; no items give an empty string.
pub fn join_or<T: Display>(items: &[T], delimiter: &str, word: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{} {} {}", first, word, second),
        [init @ .., last] => {
            let head: Vec<String> = init.iter().map(ToString::to_string).collect();
            format!("{}{}{} {}", head.join(delimiter), delimiter, word, last)
        }
    }
}
