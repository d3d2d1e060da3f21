//! Hit resolution: which enemy, if any, a click lands on.

use glam::DVec2;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use graveshot_core::components::{Enemy, SpawnIndex};
use graveshot_core::enums::EnemyKind;
use graveshot_motion::enemy;

/// A confirmed hit on one enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    /// Spawn index of the enemy that was shot.
    pub index: usize,
    pub kind: EnemyKind,
    /// Score the kind is worth. Applying it is up to the caller.
    pub points: u32,
}

/// Find the topmost enemy under `point` and shoot it.
///
/// Scans from the most recently spawned enemy down, so the one drawn on top
/// wins when hitboxes overlap. At most one enemy is affected.
pub fn resolve_click(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    point: DVec2,
    order: &mut Vec<Entity>,
) -> Option<Hit> {
    crate::world_setup::spawn_order(world, order);

    for &entity in order.iter().rev() {
        let Ok((index, target)) = world.query_one_mut::<(&SpawnIndex, &mut Enemy)>(entity) else {
            continue;
        };
        if enemy::is_hit(target, point) {
            enemy::on_shot(target, rng);
            let kind = target.kind();
            return Some(Hit {
                index: index.0,
                kind,
                points: kind.points(),
            });
        }
    }

    None
}
