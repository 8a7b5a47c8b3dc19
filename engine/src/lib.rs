pub mod combat;
pub mod console;
pub mod creature;
pub mod encounter;
pub mod game;
pub mod monsters;
pub mod rng;

pub use combat::{attack_monster, attack_player, AttackOutcome};
pub use console::Console;
pub use creature::{Creature, Player, WINNING_LEVEL};
pub use encounter::{run_encounter, status_table, Choice, Encounter, EncounterEnd, EncounterState};
pub use game::{play, GameConfig, GameOutcome};
pub use monsters::{random_kind, Monster, MonsterKind};
pub use rng::{Dice, Roll};

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("input closed")]
    InputClosed,
}
