//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

use crate::constants::{MUMMY_POINTS, ZOMBIE_POINTS};

/// Enemy species. Each one has its own sprite and motion pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Walks in a straight line and bounces off the canvas edges.
    Zombie,
    /// Circles around a center that moves now and then.
    Mummy,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 2] = [EnemyKind::Zombie, EnemyKind::Mummy];

    /// Score awarded for shooting this kind.
    pub fn points(self) -> u32 {
        match self {
            EnemyKind::Zombie => ZOMBIE_POINTS,
            EnemyKind::Mummy => MUMMY_POINTS,
        }
    }
}

/// Game loop driver state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoopState {
    /// No frames scheduled. Initial state and the state after a reset.
    #[default]
    Stopped,
    /// Frames are being scheduled and the simulation advances.
    Running,
    /// Frames cancelled; enemies frozen until the next start.
    Paused,
}

/// How long a status message stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum MessageDisplay {
    /// Remove whatever message is showing.
    Hide,
    /// Show, then hide after the given delay.
    Timed { millis: u32 },
    /// Show until replaced.
    Persistent,
}
