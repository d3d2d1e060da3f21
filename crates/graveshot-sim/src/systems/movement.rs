//! Simulation step: advances every enemy by the frame's delta time.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use graveshot_core::components::Enemy;
use graveshot_core::types::Arena;
use graveshot_motion::enemy::{self, Step};
use graveshot_motion::MotionTuning;

/// Advance all enemies by `dt` seconds, in spawn order.
///
/// `order` is a scratch buffer; its contents are replaced.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    arena: &Arena,
    tuning: &MotionTuning,
    dt: f64,
    order: &mut Vec<Entity>,
) {
    crate::world_setup::spawn_order(world, order);

    for &entity in order.iter() {
        let Ok(enemy) = world.query_one_mut::<&mut Enemy>(entity) else {
            continue;
        };
        match enemy::advance(enemy, rng, arena, tuning, dt) {
            Step::Respawned => tracing::trace!(?entity, "enemy respawned"),
            Step::Vanished => tracing::trace!(?entity, "enemy vanished"),
            Step::Waiting | Step::Moved => {}
        }
    }
}
