//! Tests driving the console front-end with scripted keyboard input.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;
use std::path::PathBuf;
use tictactoe_cli::{Cli, Console, GameConfig, Messages, run_session};
use tictactoe_core::{Board, HumanInput, PlayError, Player, Position};

fn config(wins_needed: u32, first: Option<Player>) -> GameConfig {
    let cli = Cli {
        config: PathBuf::from("does-not-exist/tictactoe.toml"),
        wins_needed: Some(wins_needed),
        seed: Some(1),
        first,
        messages: None,
        no_clear: true,
    };
    GameConfig::resolve(&cli).unwrap()
}

fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    console_with_clear(input, false)
}

fn console_with_clear(input: &str, clear_screen: bool) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        Messages::builtin().unwrap(),
        clear_screen,
    )
}

fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).unwrap()
}

// With the human opening on 1, 2 and 4 the computer answers 5, 3 (block)
// and then completes 3-5-7 without ever needing the random source.
const LOSING_ROUND: &str = "1\n2\n4\n";

#[test]
fn test_single_round_match() {
    let mut console = console(&format!("{}n\n", LOSING_ROUND));
    let mut rng = StdRng::seed_from_u64(1);

    let results = run_session(&mut console, &config(1, Some(Player::Human)), &mut rng).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(*results[0].grand_winner(), Some(Player::Computer));
    let text = output(console);
    assert!(text.contains("=> Welcome to Tic Tac Toe!"));
    assert!(text.contains("First to win 1 rounds"));
    assert!(text.contains("=> Choose a square: 1, 2, 3, 4, 5, 6, 7, 8, or 9"));
    assert!(text.contains("=> Computer chose square 5."));
    assert!(text.contains("=> Computer won!"));
    assert!(text.contains("=> Player score: 0. Computer score: 1."));
    assert!(text.contains("=> Computer is the grand winner!"));
    assert!(text.contains("=> Thanks for playing Tic Tac Toe!"));
    // The deciding round never asks about the next one.
    assert!(!text.contains("Play the next round?"));
}

#[test]
fn test_bad_answers_are_reasked() {
    let input = "Nobody\nplayer\nx\n1\n5\n2\n4\nmaybe\nn\n";
    let mut console = console(input);
    let mut rng = StdRng::seed_from_u64(1);

    let results = run_session(&mut console, &config(1, None), &mut rng).unwrap();

    assert_eq!(results.len(), 1);
    let text = output(console);
    assert!(text.contains("=> Please enter Player or Computer."));
    assert_eq!(text.matches("=> Sorry, that's not a valid choice.").count(), 2);
    assert!(text.contains("=> Choose a square: 2, 3, 4, 6, 7, 8, or 9"));
    assert!(text.contains("=> Invalid answer. Play another match? (y or n)"));
}

#[test]
fn test_next_round_then_grand_winner() {
    let input = format!("{}y\n{}n\n", LOSING_ROUND, LOSING_ROUND);
    let mut console = console(&input);
    let mut rng = StdRng::seed_from_u64(1);

    let results = run_session(&mut console, &config(2, Some(Player::Human)), &mut rng).unwrap();

    assert_eq!(*results[0].rounds_played(), 2);
    assert_eq!(*results[0].score().computer(), 2);
    let text = output(console);
    assert_eq!(text.matches("=> Play the next round? (y or n)").count(), 1);
    assert!(text.contains("=> Player score: 0. Computer score: 2."));
    assert!(text.contains("=> Computer is the grand winner!"));
}

#[test]
fn test_stopping_early_has_no_grand_winner() {
    let input = format!("{}n\nn\n", LOSING_ROUND);
    let mut console = console(&input);
    let mut rng = StdRng::seed_from_u64(1);

    let results = run_session(&mut console, &config(2, Some(Player::Human)), &mut rng).unwrap();

    assert_eq!(*results[0].grand_winner(), None);
    assert_eq!(*results[0].score().computer(), 1);
    assert!(!output(console).contains("Computer is the grand winner!"));
}

#[test]
fn test_play_again_starts_fresh_match() {
    let input = format!("{}y\n{}n\n", LOSING_ROUND, LOSING_ROUND);
    let mut console = console(&input);
    let mut rng = StdRng::seed_from_u64(1);

    let results = run_session(&mut console, &config(1, Some(Player::Human)), &mut rng).unwrap();

    assert_eq!(results.len(), 2);
    for result in &results {
        assert_eq!(*result.score().computer(), 1);
        assert_eq!(*result.rounds_played(), 1);
    }
}

#[test]
fn test_closed_input_aborts() {
    let mut console = console("1\n");
    let mut rng = StdRng::seed_from_u64(1);

    let err = run_session(&mut console, &config(1, Some(Player::Human)), &mut rng).unwrap_err();

    assert!(matches!(err, PlayError::Input(_)));
}

#[test]
fn test_square_prompt_accepts_padded_id() {
    let mut console = console("  9  \n");
    let square = console.choose_square(&Board::new()).unwrap();
    assert_eq!(square, Position::BottomRight);
}

#[test]
fn test_board_drawn_with_legend() {
    let mut console = console(LOSING_ROUND);
    let mut rng = StdRng::seed_from_u64(1);
    let mut game = tictactoe_core::Match::new(
        tictactoe_core::MatchConfig::new(Player::Human, 1).unwrap(),
        &mut rng,
    );

    game.run(&mut console).unwrap();

    let text = output(console);
    assert!(text.contains("You are X. Computer is O"));
    assert!(text.contains("  X  |  X  |  O"));
    assert!(text.contains("-----+-----+-----"));
}

#[test]
fn test_clearing_redraws_and_hides_computer_move() {
    let mut console = console_with_clear(&format!("{}n\n", LOSING_ROUND), true);
    let mut rng = StdRng::seed_from_u64(1);

    run_session(&mut console, &config(1, Some(Player::Human)), &mut rng).unwrap();

    let text = output(console);
    // Six turns plus the final board, each on a cleared screen.
    assert_eq!(text.matches("\x1b[2J").count(), 7);
    assert!(!text.contains("Computer chose square"));
    assert!(text.contains("=> Computer is the grand winner!"));
}
