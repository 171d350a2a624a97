//! Line-oriented terminal front-end.
//!
//! [`Console`] implements every collaborator the engine needs: it reads the
//! human's squares and the between-round decisions, and prints the board,
//! results and score. Prompts are prefixed with `=> ` and re-asked until the
//! answer is valid.

use crate::messages::{Messages, render};
use crate::render::{board as draw_grid, join_or, player_symbol};
use crossterm::{cursor, queue, terminal};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tictactoe_core::{
    Board, DisplaySink, HumanInput, InputError, MatchControl, MatchResult, Move, NextRound,
    Outcome, Player, Position, Round, Score,
};
use tracing::{debug, instrument, warn};

/// Terminal collaborator over any line reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    messages: Messages,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over `input` and `output`.
    pub fn new(input: R, output: W, messages: Messages, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            messages,
            clear_screen,
        }
    }

    /// The catalog in use.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Greets the player and explains the rules.
    #[instrument(skip(self))]
    pub fn intro(&mut self, wins_needed: u32) -> Result<(), InputError> {
        let rule_three = render(
            self.messages.rule_three(),
            &[("wins_needed", wins_needed.to_string())],
        );
        for line in [
            self.messages.intro().clone(),
            self.messages.rule_one().clone(),
            self.messages.rule_two().clone(),
            rule_three,
        ] {
            self.prompt(&line)?;
        }
        Ok(())
    }

    /// Asks who moves first until the answer names a player.
    #[instrument(skip(self))]
    pub fn choose_first(&mut self) -> Result<Player, InputError> {
        let question = self.messages.choose_first().clone();
        self.prompt(&question)?;
        loop {
            let answer = self.read_line()?;
            if let Ok(player) = Player::from_str(answer.trim()) {
                debug!(%player, "First player chosen");
                return Ok(player);
            }
            let invalid = self.messages.invalid_first().clone();
            self.prompt(&invalid)?;
        }
    }

    /// Asks whether to start a new match.
    #[instrument(skip(self))]
    pub fn play_again(&mut self) -> Result<bool, InputError> {
        let question = self.messages.play_again().clone();
        let invalid = self.messages.invalid_again().clone();
        self.ask_yes_no(&question, &invalid)
    }

    /// Says goodbye.
    pub fn farewell(&mut self) -> Result<(), InputError> {
        let thanks = self.messages.thanks().clone();
        self.prompt(&thanks)?;
        Ok(())
    }

    fn ask_yes_no(&mut self, question: &str, invalid: &str) -> Result<bool, InputError> {
        self.prompt(question)?;
        loop {
            match self.read_line()?.trim().to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.prompt(invalid)?,
            }
        }
    }

    fn prompt(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "=> {}", message)?;
        self.output.flush()
    }

    /// Reads one line; a closed input stream is an error.
    fn read_line(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::new("Input closed"));
        }
        Ok(line)
    }

    fn draw_board(&mut self, board: &Board) -> io::Result<()> {
        if self.clear_screen {
            queue!(
                self.output,
                terminal::Clear(terminal::ClearType::All),
                cursor::MoveTo(0, 0)
            )?;
        }
        let legend = render(
            self.messages.legend(),
            &[
                ("human", player_symbol(Player::Human).to_string()),
                ("computer", player_symbol(Player::Computer).to_string()),
            ],
        );
        writeln!(self.output, "{}", legend)?;
        writeln!(self.output)?;
        write!(self.output, "{}", draw_grid(board))?;
        writeln!(self.output)
    }

    fn score_line(&self, score: &Score) -> String {
        render(
            self.messages.score(),
            &[
                ("human", score.human().to_string()),
                ("computer", score.computer().to_string()),
            ],
        )
    }

    fn write_turn(&mut self, round: &Round, score: &Score) -> io::Result<()> {
        self.draw_board(round.board())?;
        let line = self.score_line(score);
        writeln!(self.output, "{}", line)?;
        self.output.flush()
    }

    fn write_round_result(&mut self, round: &Round, outcome: Outcome, score: &Score) -> io::Result<()> {
        self.draw_board(round.board())?;
        let Some(winner) = outcome.winner() else {
            let tie = self.messages.tie().clone();
            return self.prompt(&tie);
        };
        let text = render(self.messages.round_won(), &[("winner", winner.to_string())]);
        self.prompt(&text)?;
        let line = self.score_line(score);
        self.prompt(&line)
    }

    fn report(result: io::Result<()>) {
        if let Err(e) = result {
            warn!(error = %e, "Failed to write to terminal");
        }
    }
}

impl<R: BufRead, W: Write> HumanInput for Console<R, W> {
    #[instrument(skip_all)]
    fn choose_square(&mut self, board: &Board) -> Result<Position, InputError> {
        let open = board.empty_squares();
        let delimiter = ", ";
        let question = render(
            self.messages.choose_square(),
            &[("squares", join_or(&open, delimiter, self.messages.or_word()))],
        );
        loop {
            self.prompt(&question)?;
            let answer = self.read_line()?;
            match Position::from_str(&answer) {
                Ok(pos) if open.contains(&pos) => return Ok(pos),
                Ok(pos) => debug!(square = %pos, "Square already taken"),
                Err(e) => debug!(error = %e, "Unreadable square"),
            }
            let invalid = self.messages.invalid_square().clone();
            self.prompt(&invalid)?;
        }
    }
}

impl<R: BufRead, W: Write> DisplaySink for Console<R, W> {
    fn show_turn(&mut self, round: &Round, score: &Score) {
        let result = self.write_turn(round, score);
        Self::report(result);
    }

    fn show_move(&mut self, mv: &Move, _round: &Round) {
        // The next redraw would wipe this line straight away.
        if self.clear_screen || mv.player != Player::Computer {
            return;
        }
        let text = render(self.messages.computer_move(), &[("square", mv.position.to_string())]);
        let result = self.prompt(&text);
        Self::report(result);
    }

    fn show_round_result(&mut self, round: &Round, outcome: Outcome, score: &Score) {
        let result = self.write_round_result(round, outcome, score);
        Self::report(result);
    }

    fn show_match_result(&mut self, result: &MatchResult) {
        if let Some(winner) = result.grand_winner() {
            let text = render(self.messages.grand_winner(), &[("winner", winner.to_string())]);
            let written = self.prompt(&text);
            Self::report(written);
        }
    }
}

impl<R: BufRead, W: Write> MatchControl for Console<R, W> {
    #[instrument(skip_all)]
    fn next_round(&mut self, _score: &Score) -> Result<NextRound, InputError> {
        let question = self.messages.next_round().clone();
        let invalid = self.messages.invalid_next().clone();
        if self.ask_yes_no(&question, &invalid)? {
            Ok(NextRound::Continue)
        } else {
            Ok(NextRound::Stop)
        }
    }
}
