use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::console::Console;
use crate::creature::Player;
use crate::encounter::run_encounter;
use crate::rng::{Dice, Roll};
use crate::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fixed RNG seed; `None` seeds from the wall clock.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn dice(&self) -> Dice {
        match self.seed {
            Some(seed) => Dice::from_seed(seed),
            None => Dice::from_clock(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum GameOutcome {
    Died { player: Player },
    Won { player: Player },
    /// Input ran out before the game was decided.
    Abandoned { player: Option<Player> },
}

/// Ask for a name, then run encounters until the player dies or wins.
pub fn play<R: BufRead, W: Write>(
    roll: &mut impl Roll,
    console: &mut Console<R>,
    out: &mut W,
) -> Result<GameOutcome, GameError> {
    write!(out, "Enter your name: ")?;
    out.flush()?;
    let name = match console.read_token() {
        Ok(name) => name,
        Err(GameError::InputClosed) => return abandon(out, None),
        Err(e) => return Err(e),
    };
    writeln!(out, "Welcome, {name}")?;

    let mut player = Player::new(name);
    info!(player = player.name(), "game started");

    loop {
        let end = match run_encounter(&mut player, roll, console, out) {
            Ok(end) => end,
            Err(GameError::InputClosed) => return abandon(out, Some(player)),
            Err(e) => return Err(e),
        };
        if end.escaped() {
            continue;
        }

        if player.has_lost() {
            writeln!(
                out,
                "You died at level {} and with {} gold.",
                player.level, player.creature.gold
            )?;
            info!(level = player.level, gold = player.creature.gold, "player died");
            return Ok(GameOutcome::Died { player });
        }

        if player.has_won() {
            writeln!(out, "You won! You had {} gold.", player.creature.gold)?;
            info!(level = player.level, gold = player.creature.gold, "player won");
            return Ok(GameOutcome::Won { player });
        }
    }
}

fn abandon<W: Write>(out: &mut W, player: Option<Player>) -> Result<GameOutcome, GameError> {
    writeln!(out)?;
    writeln!(out, "Input closed; leaving the arena.")?;
    info!("input closed before the game ended");
    Ok(GameOutcome::Abandoned { player })
}
