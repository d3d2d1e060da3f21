//! Game state snapshot: the complete visible state sent to the frontend.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, LoopState};
use crate::events::{AudioEvent, SessionEvent};

/// Game state broadcast to the frontend after each frame or command.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub loop_state: LoopState,
    pub score: u32,
    pub enemies: Vec<EnemyView>,
    /// Draw commands of the frame rendered since the last snapshot, if any.
    pub frame: Option<Vec<DrawCommand>>,
    pub events: Vec<SessionEvent>,
    pub audio_events: Vec<AudioEvent>,
}

/// Read-only view of one enemy, in population order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub index: usize,
    pub kind: EnemyKind,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub visible: bool,
}

/// One canvas operation. `Sprite` coordinates are the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum DrawCommand {
    Clear {
        width: f64,
        height: f64,
    },
    Sprite {
        kind: EnemyKind,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    },
}

/// Recorded frame, replayed by the frontend onto its canvas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Move the recorded commands out, leaving the list empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}
