use tracing::debug;

use crate::creature::Player;
use crate::monsters::Monster;

/// What one `attack_monster` call ended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// Monster died; the player looted `gold` and reached `level`.
    Killed { gold: i32, level: u32 },
    /// Monster survived and hit back for `damage`.
    CounterAttacked { damage: i32 },
}

/// The monster hits the player. Death is left to the caller.
pub fn attack_player(player: &mut Player, monster: &Monster, mut log: impl FnMut(String)) -> i32 {
    let damage = monster.creature.damage;
    player.creature.take_damage(damage);
    log(format!("The {} hit you for {} damage.", monster.name(), damage));
    debug!(monster = monster.name(), damage, player_health = player.creature.health, "monster attack");
    damage
}

/// The player swings first; a surviving monster answers in the same call.
pub fn attack_monster(
    player: &mut Player,
    monster: &mut Monster,
    mut log: impl FnMut(String),
) -> AttackOutcome {
    let damage = player.creature.damage;
    monster.creature.take_damage(damage);
    log(format!("you hit the {} for {} damage.", monster.name(), damage));
    debug!(monster = monster.name(), damage, monster_health = monster.creature.health, "player attack");

    if monster.creature.is_dead() {
        log(format!("You killed the {}.", monster.name()));

        player.level_up();
        log(format!("You are now level {}.", player.level));

        let gold = monster.creature.take_gold();
        player.creature.add_gold(gold);
        log(format!("You found {} gold.", gold));

        AttackOutcome::Killed { gold, level: player.level }
    } else {
        let damage = attack_player(player, monster, &mut log);
        AttackOutcome::CounterAttacked { damage }
    }
}
