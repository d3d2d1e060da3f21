//! Render step: clears the surface and draws every visible enemy.
//!
//! Read-only over the world. Enemies are drawn in spawn order so later
//! ones end up on top.

use hecs::World;

use graveshot_core::components::{Enemy, SpawnIndex};
use graveshot_core::types::Arena;

use crate::host::{RenderSurface, SpriteProvider};

pub fn run(world: &World, arena: &Arena, surface: &mut impl RenderSurface, sprites: &impl SpriteProvider) {
    surface.clear(arena.width, arena.height);

    let mut query = world.query::<(&SpawnIndex, &Enemy)>();
    let mut enemies: Vec<(SpawnIndex, &Enemy)> =
        query.iter().map(|(_, (index, enemy))| (*index, enemy)).collect();
    enemies.sort_unstable_by_key(|(index, _)| *index);

    for (_, enemy) in enemies {
        draw(enemy, surface, sprites);
    }
}

/// Draw one enemy centered on its position. Hidden enemies and enemies whose
/// sprite has not loaded yet are skipped.
pub fn draw(enemy: &Enemy, surface: &mut impl RenderSurface, sprites: &impl SpriteProvider) {
    if !enemy.is_visible() {
        return;
    }
    let kind = enemy.kind();
    if !sprites.is_ready(kind) {
        return;
    }
    let half = enemy.size / 2.0;
    surface.draw_sprite(
        kind,
        enemy.position.x - half,
        enemy.position.y - half,
        enemy.size,
        enemy.size,
    );
}
