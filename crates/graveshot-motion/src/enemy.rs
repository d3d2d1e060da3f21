//! Enemy motion and visibility state machine.
//!
//! An enemy is either visible and moving, or hidden and counting down to a
//! respawn. Hiding happens on its own (small chance every tick) or when the
//! player shoots it. Scoring is not handled here.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use graveshot_core::components::{Enemy, Motion, Orbit, Visibility};
use graveshot_core::constants::*;
use graveshot_core::enums::EnemyKind;
use graveshot_core::types::Arena;

use crate::sampling::{distance, point_in, random_sign, roll, uniform};
use crate::tuning::MotionTuning;

/// What happened to an enemy during one `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Still hidden, timer counting down.
    Waiting,
    /// Timer ran out; the enemy is back at a fresh spawn point.
    Respawned,
    /// Visible and moved.
    Moved,
    /// Moved, then vanished on its own.
    Vanished,
}

/// Create a new visible enemy of the given kind at a random spawn point.
pub fn spawn(rng: &mut ChaCha8Rng, arena: &Arena, kind: EnemyKind) -> Enemy {
    let size = uniform(rng, SIZE_MIN, SIZE_MAX).floor();
    let (position, motion) = roll_placement(rng, arena, kind);
    Enemy {
        size,
        position,
        visibility: Visibility::Visible,
        motion,
    }
}

/// Full reset: new position and motion parameters, visible again.
/// Size and kind are kept.
pub fn respawn(enemy: &mut Enemy, rng: &mut ChaCha8Rng, arena: &Arena) {
    let (position, motion) = roll_placement(rng, arena, enemy.kind());
    enemy.position = position;
    enemy.motion = motion;
    enemy.visibility = Visibility::Visible;
}

/// Advance one tick of `dt` seconds.
pub fn advance(
    enemy: &mut Enemy,
    rng: &mut ChaCha8Rng,
    arena: &Arena,
    tuning: &MotionTuning,
    dt: f64,
) -> Step {
    if let Visibility::Hidden { reappear_in } = &mut enemy.visibility {
        *reappear_in -= dt;
        if *reappear_in <= 0.0 {
            respawn(enemy, rng, arena);
            return Step::Respawned;
        }
        return Step::Waiting;
    }

    let scaled_dt = dt * tuning.frame_scale;

    let hide_chance = match &mut enemy.motion {
        Motion::Linear { velocity } => {
            enemy.position += *velocity * scaled_dt;

            // Direction flip only: the walker may overshoot slightly and
            // comes back on the next tick.
            let margin = tuning.bounce_margin;
            if enemy.position.x < margin || enemy.position.x > arena.width - margin {
                velocity.x = -velocity.x;
            }
            if enemy.position.y < margin || enemy.position.y > arena.height - margin {
                velocity.y = -velocity.y;
            }

            tuning.linear_hide_chance
        }
        Motion::Circular(orbit) => {
            orbit.angle += orbit.angular_speed * scaled_dt;
            enemy.position = orbit.center + DVec2::from_angle(orbit.angle) * orbit.radius;

            if roll(rng, tuning.circular_recenter_chance) {
                recenter(orbit, rng, arena);
            }

            tuning.circular_hide_chance
        }
    };

    if roll(rng, hide_chance) {
        hide_temporarily(enemy, rng);
        Step::Vanished
    } else {
        Step::Moved
    }
}

/// Vanish on its own for 0.8 to 2.5 seconds.
pub fn hide_temporarily(enemy: &mut Enemy, rng: &mut ChaCha8Rng) {
    enemy.visibility = Visibility::Hidden {
        reappear_in: uniform(rng, HIDE_TIMER_MIN, HIDE_TIMER_MAX),
    };
}

/// Confirmed hit: vanish for 0.6 to 2.0 seconds. The caller awards points.
pub fn on_shot(enemy: &mut Enemy, rng: &mut ChaCha8Rng) {
    enemy.visibility = Visibility::Hidden {
        reappear_in: uniform(rng, SHOT_TIMER_MIN, SHOT_TIMER_MAX),
    };
}

/// Whether a click at `point` hits this enemy. Hidden enemies are never hit.
pub fn is_hit(enemy: &Enemy, point: DVec2) -> bool {
    enemy.is_visible() && distance(point, enemy.position) <= hitbox_radius(enemy.size)
}

/// Radius of the circular hitbox for a sprite of the given diameter.
///
/// Smaller than the sprite, with a floor so tiny sprites stay clickable.
pub fn hitbox_radius(size: f64) -> f64 {
    (size / 2.0).max(HITBOX_MIN_RADIUS) * HITBOX_SCALE
}

fn roll_placement(rng: &mut ChaCha8Rng, arena: &Arena, kind: EnemyKind) -> (DVec2, Motion) {
    let (min, max) = arena.inset(SPAWN_MARGIN);
    let position = point_in(rng, min, max);

    let motion = match kind {
        EnemyKind::Zombie => {
            let speed = uniform(rng, LINEAR_SPEED_MIN, LINEAR_SPEED_MAX);
            let heading = uniform(rng, 0.0, TAU);
            Motion::Linear {
                velocity: DVec2::from_angle(heading) * speed,
            }
        }
        EnemyKind::Mummy => {
            let (min, max) = arena.inset(ORBIT_CENTER_MARGIN);
            let center = point_in(rng, min, max);
            let radius = uniform(rng, ORBIT_RADIUS_MIN, ORBIT_RADIUS_MAX);
            let angle = uniform(rng, 0.0, TAU);
            let angular_speed =
                uniform(rng, ORBIT_SPEED_MIN, ORBIT_SPEED_MAX) * random_sign(rng);
            Motion::Circular(Orbit {
                center,
                radius,
                angle,
                angular_speed,
            })
        }
    };

    (position, motion)
}

/// Move the orbit somewhere else. The phase angle carries over.
fn recenter(orbit: &mut Orbit, rng: &mut ChaCha8Rng, arena: &Arena) {
    let (min, max) = arena.inset(ORBIT_CENTER_MARGIN);
    orbit.center = point_in(rng, min, max);
    orbit.radius = uniform(rng, ORBIT_RADIUS_MIN, ORBIT_RECENTER_RADIUS_MAX);
    orbit.angular_speed = uniform(rng, ORBIT_SPEED_MIN, ORBIT_RECENTER_SPEED_MAX) * random_sign(rng);
}
