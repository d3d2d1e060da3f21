//! Motion tuning shared by every enemy.
//!
//! Chances are per simulation tick, not per second: a host running at a
//! higher frame rate sees more vanishing enemies.

use graveshot_core::constants::*;

/// Per-tick behavior parameters for the enemy state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionTuning {
    /// Multiplier on `dt` before integrating velocities and angles.
    pub frame_scale: f64,
    /// Distance from an edge at which walkers reverse.
    pub bounce_margin: f64,
    /// Chance per tick that a walker hides itself.
    pub linear_hide_chance: f64,
    /// Chance per tick that a circler picks a new orbit.
    pub circular_recenter_chance: f64,
    /// Chance per tick that a circler hides itself.
    pub circular_hide_chance: f64,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            frame_scale: FRAME_SCALE,
            bounce_margin: BOUNCE_MARGIN,
            linear_hide_chance: LINEAR_HIDE_CHANCE,
            circular_recenter_chance: CIRCULAR_RECENTER_CHANCE,
            circular_hide_chance: CIRCULAR_HIDE_CHANCE,
        }
    }
}

impl MotionTuning {
    /// Tuning with every random event disabled. Motion becomes fully
    /// deterministic given the enemy state.
    pub fn without_random_events() -> Self {
        Self {
            linear_hide_chance: 0.0,
            circular_recenter_chance: 0.0,
            circular_hide_chance: 0.0,
            ..Self::default()
        }
    }
}
