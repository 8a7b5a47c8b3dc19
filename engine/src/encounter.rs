use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::combat::{attack_monster, attack_player};
use crate::console::Console;
use crate::creature::Player;
use crate::monsters::Monster;
use crate::rng::Roll;
use crate::GameError;

const RULE_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Fight,
    Run,
    /// Anything else; ignored.
    Other(char),
}

impl From<char> for Choice {
    fn from(c: char) -> Self {
        match c {
            'f' => Choice::Fight,
            'r' => Choice::Run,
            other => Choice::Other(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncounterEnd {
    Escaped,
    MonsterDead,
    PlayerDead,
}

impl EncounterEnd {
    /// True only when the player got away; deaths report false.
    pub fn escaped(self) -> bool {
        matches!(self, EncounterEnd::Escaped)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterState {
    AwaitingChoice,
    Resolved(EncounterEnd),
}

/// One player-vs-monster fight, from spawn to resolution.
#[derive(Debug, Clone)]
pub struct Encounter {
    pub monster: Monster,
    state: EncounterState,
}

impl Encounter {
    pub fn new(monster: Monster) -> Self {
        Self { monster, state: EncounterState::AwaitingChoice }
    }

    pub fn spawn(roll: &mut impl Roll) -> Self {
        let monster = Monster::random(roll);
        debug!(kind = ?monster.kind, "monster spawned");
        Self::new(monster)
    }

    pub fn state(&self) -> EncounterState {
        self.state
    }

    /// Advance the state machine by one choice. Resolved encounters ignore
    /// further input.
    pub fn apply(
        &mut self,
        player: &mut Player,
        choice: Choice,
        roll: &mut impl Roll,
        mut log: impl FnMut(String),
    ) -> EncounterState {
        if self.state != EncounterState::AwaitingChoice {
            return self.state;
        }

        match choice {
            Choice::Fight => {
                attack_monster(player, &mut self.monster, &mut log);
            }
            Choice::Run => {
                if roll.range(0, 1) == 1 {
                    log(format!("You escaped the {}.", self.monster.name()));
                    self.state = EncounterState::Resolved(EncounterEnd::Escaped);
                    return self.state;
                }
                log(format!("You couldn't escape the {}.", self.monster.name()));
                attack_player(player, &self.monster, &mut log);
            }
            Choice::Other(c) => {
                debug!(input = %c, "ignoring unrecognised choice");
                return self.state;
            }
        }

        if player.has_lost() {
            self.state = EncounterState::Resolved(EncounterEnd::PlayerDead);
        } else if self.monster.creature.is_dead() {
            self.state = EncounterState::Resolved(EncounterEnd::MonsterDead);
        }
        self.state
    }
}

/// Fixed-width two-row status table, without a trailing newline.
pub fn status_table(player: &Player, monster: &Monster) -> String {
    let p = &player.creature;
    let m = &monster.creature;
    [
        "_".repeat(RULE_WIDTH),
        format!(
            "|Player: {:<12.12}|Health: {:>4}|Gold: {:>5}|Damage: {:>3}|Level: {:>3}|",
            p.name, p.health, p.gold, p.damage, player.level
        ),
        "-".repeat(RULE_WIDTH),
        format!(
            "|Monster: {:<11.11}|Health: {:>4}|Gold: {:>5}|Damage: {:>3}|Symbol: {:>2}|",
            m.name, m.health, m.gold, m.damage, m.symbol
        ),
        "`".repeat(RULE_WIDTH),
    ]
    .join("\n")
}

/// Spawn a monster and prompt until the encounter resolves.
pub fn run_encounter<R: BufRead, W: Write>(
    player: &mut Player,
    roll: &mut impl Roll,
    console: &mut Console<R>,
    out: &mut W,
) -> Result<EncounterEnd, GameError> {
    let mut encounter = Encounter::spawn(roll);
    let monster = &encounter.monster;

    writeln!(out)?;
    writeln!(out, "[You have encountered a/an {} ({}).]", monster.name(), monster.creature.symbol)?;
    writeln!(out, "{}", status_table(player, monster))?;

    loop {
        write!(out, "(R)un or (F)ight: ")?;
        out.flush()?;
        let choice = Choice::from(console.read_char()?);

        let mut lines = Vec::new();
        let state = encounter.apply(player, choice, roll, |line| lines.push(line));
        for line in lines {
            writeln!(out, "{line}")?;
        }

        if let EncounterState::Resolved(end) = state {
            debug!(?end, "encounter resolved");
            return Ok(end);
        }
    }
}
