//! A play session: intro, then matches until the player has had enough.

use crate::{Console, GameConfig};
use rand::Rng;
use std::io::{BufRead, Write};
use tictactoe_core::{Match, MatchConfig, MatchResult, PlayError};
use tracing::{info, instrument};

/// Runs matches on `console` until the player declines another one.
///
/// The starting player comes from `config` when fixed, otherwise it is asked
/// before each match. Returns the result of every match played.
#[instrument(skip_all, fields(wins_needed = config.wins_needed()))]
pub fn run_session<R, W, G>(
    console: &mut Console<R, W>,
    config: &GameConfig,
    rng: &mut G,
) -> Result<Vec<MatchResult>, PlayError>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    let wins_needed = *config.wins_needed();
    console.intro(wins_needed)?;

    let mut results = Vec::new();
    loop {
        let first = match config.first() {
            Some(player) => *player,
            None => console.choose_first()?,
        };

        let mut game = Match::new(MatchConfig::new(first, wins_needed)?, &mut *rng);
        results.push(game.run(console)?);

        if !console.play_again()? {
            break;
        }
    }

    info!(matches = results.len(), "Session finished");
    console.farewell()?;
    Ok(results)
}
