//! ECS components for hecs entities.
//!
//! Components are plain data. Enemy behavior lives in `graveshot-motion`,
//! world-level logic in the `graveshot-sim` systems.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::EnemyKind;

/// A zombie or mummy on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Sprite diameter in pixels. Fixed for the lifetime of the entity.
    pub size: f64,
    /// Sprite center in canvas coordinates.
    pub position: DVec2,
    pub visibility: Visibility,
    pub motion: Motion,
}

impl Enemy {
    pub fn kind(&self) -> EnemyKind {
        self.motion.kind()
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.visibility, Visibility::Visible)
    }
}

/// Whether an enemy is on screen. A hidden enemy carries its respawn timer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Visibility {
    Visible,
    Hidden {
        /// Seconds left until the enemy respawns somewhere else.
        reappear_in: f64,
    },
}

/// Kind-specific motion parameters. The variant decides the enemy kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Motion {
    /// Straight-line walk, reflected at the canvas edges.
    Linear {
        /// Pixels per reference frame.
        velocity: DVec2,
    },
    /// Circular path around a movable center.
    Circular(Orbit),
}

impl Motion {
    pub fn kind(&self) -> EnemyKind {
        match self {
            Motion::Linear { .. } => EnemyKind::Zombie,
            Motion::Circular(_) => EnemyKind::Mummy,
        }
    }
}

/// Orbit of a circling enemy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orbit {
    pub center: DVec2,
    pub radius: f64,
    /// Current phase (radians).
    pub angle: f64,
    /// Radians per reference frame. Negative orbits run the other way.
    pub angular_speed: f64,
}

/// Position of an entity in population order.
///
/// Higher indices were added later: they are drawn on top and win
/// overlapping clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpawnIndex(pub usize);
