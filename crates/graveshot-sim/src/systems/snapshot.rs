//! Snapshot system: reads the world and builds a GameStateSnapshot.
//!
//! Read-only over the world.

use hecs::World;

use graveshot_core::enums::LoopState;
use graveshot_core::events::{AudioEvent, SessionEvent};
use graveshot_core::state::{DrawCommand, GameStateSnapshot};

use crate::world_setup::enemy_views;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    loop_state: LoopState,
    score: u32,
    frame: Option<Vec<DrawCommand>>,
    events: Vec<SessionEvent>,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        loop_state,
        score,
        enemies: enemy_views(world),
        frame,
        events,
        audio_events,
    }
}
