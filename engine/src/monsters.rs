use serde::{Deserialize, Serialize};

use crate::creature::Creature;
use crate::rng::Roll;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonsterKind {
    Dragon,
    Orc,
    Slime,
}

/// Fixed stats for one archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MonsterData {
    name: &'static str,
    symbol: char,
    health: i32,
    damage: i32,
    gold: i32,
}

const CATALOG: [MonsterData; 3] = [
    MonsterData { name: "dragon", symbol: 'D', health: 20, damage: 4, gold: 100 },
    MonsterData { name: "orc", symbol: 'o', health: 4, damage: 2, gold: 25 },
    MonsterData { name: "slime", symbol: 's', health: 1, damage: 1, gold: 10 },
];

impl MonsterKind {
    /// Catalog order; `random_kind` indexes into this.
    pub const ALL: [MonsterKind; 3] = [MonsterKind::Dragon, MonsterKind::Orc, MonsterKind::Slime];

    fn data(self) -> &'static MonsterData {
        &CATALOG[self as usize]
    }
}

/// Uniform pick over the catalog.
pub fn random_kind(roll: &mut impl Roll) -> MonsterKind {
    let idx = roll.range(0, MonsterKind::ALL.len() as i32 - 1);
    MonsterKind::ALL[idx as usize]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub kind: MonsterKind,
    pub creature: Creature,
}

impl Monster {
    pub fn new(kind: MonsterKind) -> Self {
        let d = kind.data();
        Self {
            kind,
            creature: Creature::new(d.name, d.symbol, d.health, d.damage, d.gold),
        }
    }

    pub fn random(roll: &mut impl Roll) -> Self {
        Self::new(random_kind(roll))
    }

    pub fn name(&self) -> &str {
        &self.creature.name
    }
}
