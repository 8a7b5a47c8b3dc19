use serde::{Deserialize, Serialize};

const PLAYER_SYMBOL: char = '@';
const PLAYER_START_HEALTH: i32 = 10;
const PLAYER_START_DAMAGE: i32 = 1;
pub const WINNING_LEVEL: u32 = 20;

/// Stats shared by everything that can fight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub name: String,
    pub symbol: char,
    /// Can dip below zero on the killing blow.
    pub health: i32,
    pub damage: i32,
    pub gold: i32,
}

impl Creature {
    pub fn new(name: impl Into<String>, symbol: char, health: i32, damage: i32, gold: i32) -> Self {
        Self {
            name: name.into(),
            symbol,
            health,
            damage,
            gold,
        }
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    pub fn add_gold(&mut self, amount: i32) {
        self.gold += amount;
    }

    /// Empty the purse, returning what was in it.
    pub fn take_gold(&mut self) -> i32 {
        std::mem::take(&mut self.gold)
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub creature: Creature,
    pub level: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            creature: Creature::new(
                name,
                PLAYER_SYMBOL,
                PLAYER_START_HEALTH,
                PLAYER_START_DAMAGE,
                0,
            ),
            level: 1,
        }
    }

    /// One level and one point of damage.
    pub fn level_up(&mut self) {
        self.level += 1;
        self.creature.damage += 1;
    }

    pub fn has_won(&self) -> bool {
        self.level >= WINNING_LEVEL
    }

    pub fn has_lost(&self) -> bool {
        self.creature.is_dead()
    }

    pub fn name(&self) -> &str {
        &self.creature.name
    }
}
