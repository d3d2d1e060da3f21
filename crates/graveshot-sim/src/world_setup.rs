//! Enemy population: spawning the batch of enemies and walking it in order.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use graveshot_core::components::{Enemy, SpawnIndex};
use graveshot_core::constants::ZOMBIE_SPAWN_CHANCE;
use graveshot_core::enums::EnemyKind;
use graveshot_core::state::EnemyView;
use graveshot_core::types::Arena;
use graveshot_motion::enemy;

/// Replace the whole population with `count` fresh enemies.
///
/// Each enemy is independently a zombie with probability 0.55, otherwise a
/// mummy. Spawn indices run from 0 to `count - 1`.
pub fn populate(world: &mut World, rng: &mut ChaCha8Rng, arena: &Arena, count: usize) {
    world.clear();
    for index in 0..count {
        let kind = roll_kind(rng);
        let enemy = enemy::spawn(rng, arena, kind);
        world.spawn((SpawnIndex(index), enemy));
    }
}

/// Spawn one enemy after the existing ones.
pub fn spawn_enemy(world: &mut World, enemy: Enemy) -> Entity {
    let next = world
        .query::<&SpawnIndex>()
        .iter()
        .map(|(_, index)| index.0 + 1)
        .max()
        .unwrap_or(0);
    world.spawn((SpawnIndex(next), enemy))
}

fn roll_kind(rng: &mut ChaCha8Rng) -> EnemyKind {
    if rng.gen::<f64>() < ZOMBIE_SPAWN_CHANCE {
        EnemyKind::Zombie
    } else {
        EnemyKind::Mummy
    }
}

/// Fill `buffer` with every enemy entity, lowest spawn index first.
/// Previous contents of `buffer` are discarded.
pub fn spawn_order(world: &World, buffer: &mut Vec<Entity>) {
    buffer.clear();
    let mut indexed: Vec<(SpawnIndex, Entity)> = world
        .query::<&SpawnIndex>()
        .with::<&Enemy>()
        .iter()
        .map(|(entity, index)| (*index, entity))
        .collect();
    indexed.sort_unstable_by_key(|(index, _)| *index);
    buffer.extend(indexed.into_iter().map(|(_, entity)| entity));
}

/// Read-only views of the population in spawn order.
pub fn enemy_views(world: &World) -> Vec<EnemyView> {
    let mut query = world.query::<(&SpawnIndex, &Enemy)>();
    let mut views: Vec<EnemyView> = query
        .iter()
        .map(|(_, (index, enemy))| EnemyView {
            index: index.0,
            kind: enemy.kind(),
            x: enemy.position.x,
            y: enemy.position.y,
            size: enemy.size,
            visible: enemy.is_visible(),
        })
        .collect();
    views.sort_unstable_by_key(|view| view.index);
    views
}
