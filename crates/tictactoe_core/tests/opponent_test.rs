//! Tests for the computer's move selection.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use tictactoe_core::{Board, Player, Position, Tactic, choose_move, opponent};

fn board_with(computer: &[u8], human: &[u8]) -> Board {
    let mut board = Board::new();
    for &id in computer {
        board.place(Position::from_id(id).unwrap(), Player::Computer).unwrap();
    }
    for &id in human {
        board.place(Position::from_id(id).unwrap(), Player::Human).unwrap();
    }
    board
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn test_takes_open_win() {
    let board = board_with(&[1, 2], &[]);
    assert_eq!(choose_move(&board, &mut rng()), Some(Position::TopRight));
}

#[test]
fn test_win_beats_block() {
    // Human threatens 4-5-6, computer can finish 1-2-3.
    let board = board_with(&[1, 2], &[4, 5]);
    let decision = opponent::decide(&board, &mut rng()).unwrap();
    assert_eq!(*decision.position(), Position::TopRight);
    assert_eq!(*decision.tactic(), Tactic::Win);
}

#[test]
fn test_blocks_human_line() {
    let board = board_with(&[5], &[4, 7]);
    let decision = opponent::decide(&board, &mut rng()).unwrap();
    assert_eq!(*decision.position(), Position::TopLeft);
    assert_eq!(*decision.tactic(), Tactic::Block);
}

#[test]
fn test_blocks_first_threat_in_line_order() {
    // Human threatens row 1 (-> 3) and column 1 (-> 7); rows come first.
    let board = board_with(&[5], &[1, 2, 4]);
    assert_eq!(choose_move(&board, &mut rng()), Some(Position::TopRight));
}

#[test]
fn test_empty_board_takes_center() {
    assert_eq!(choose_move(&Board::new(), &mut rng()), Some(Position::Center));
}

#[test]
fn test_center_before_random() {
    let board = board_with(&[], &[1]);
    let decision = opponent::decide(&board, &mut rng()).unwrap();
    assert_eq!(*decision.position(), Position::Center);
    assert_eq!(*decision.tactic(), Tactic::Center);
}

#[test]
fn test_random_pick_is_an_empty_square() {
    let board = board_with(&[5], &[1]);
    let empties = board.empty_squares();
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let decision = opponent::decide(&board, &mut rng).unwrap();
        assert_eq!(*decision.tactic(), Tactic::Random);
        assert!(empties.contains(decision.position()));
    }
}

#[test]
fn test_random_pick_reaches_every_empty_square() {
    let board = board_with(&[5], &[1]);
    let mut rng = StdRng::seed_from_u64(3);
    let seen: HashSet<Position> = (0..500)
        .filter_map(|_| choose_move(&board, &mut rng))
        .collect();
    let expected: HashSet<Position> = board.empty_squares().into_iter().collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_same_seed_same_choice() {
    let board = board_with(&[5], &[1]);
    let first = choose_move(&board, &mut StdRng::seed_from_u64(99));
    let second = choose_move(&board, &mut StdRng::seed_from_u64(99));
    assert_eq!(first, second);
}

#[test]
fn test_does_not_modify_board() {
    let board = board_with(&[1, 2], &[4, 5]);
    let before = board.clone();
    choose_move(&board, &mut rng());
    assert_eq!(board, before);
}
