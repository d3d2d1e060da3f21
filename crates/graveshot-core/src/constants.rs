//! Gameplay constants and tuning parameters.

// --- Arena ---

/// Default canvas width in pixels.
pub const ARENA_WIDTH: f64 = 960.0;

/// Default canvas height in pixels.
pub const ARENA_HEIGHT: f64 = 600.0;

/// Inset from each canvas edge for spawn positions.
pub const SPAWN_MARGIN: f64 = 50.0;

/// Inset from each canvas edge for orbit centers.
pub const ORBIT_CENTER_MARGIN: f64 = 100.0;

/// Distance from an edge at which a walker turns around.
pub const BOUNCE_MARGIN: f64 = 10.0;

// --- Enemy body ---

/// Sprite diameter range (pixels). Sampled once and floored.
pub const SIZE_MIN: f64 = 50.0;
pub const SIZE_MAX: f64 = 90.0;

/// Hitbox radius is this fraction of max(size / 2, HITBOX_MIN_RADIUS).
pub const HITBOX_SCALE: f64 = 0.75;

/// Floor for the hitbox base radius so small sprites stay clickable.
pub const HITBOX_MIN_RADIUS: f64 = 20.0;

// --- Motion ---

/// Scale applied to `dt` so speeds read as "pixels per 16 ms frame".
pub const FRAME_SCALE: f64 = 60.0 / 16.0;

/// Walker speed range.
pub const LINEAR_SPEED_MIN: f64 = 0.6;
pub const LINEAR_SPEED_MAX: f64 = 2.0;

/// Orbit radius range at spawn.
pub const ORBIT_RADIUS_MIN: f64 = 30.0;
pub const ORBIT_RADIUS_MAX: f64 = 90.0;

/// Orbit radius upper bound when the orbit is re-centered.
pub const ORBIT_RECENTER_RADIUS_MAX: f64 = 110.0;

/// Angular speed range (radians per reference frame) at spawn.
pub const ORBIT_SPEED_MIN: f64 = 0.01;
pub const ORBIT_SPEED_MAX: f64 = 0.05;

/// Angular speed upper bound when the orbit is re-centered.
pub const ORBIT_RECENTER_SPEED_MAX: f64 = 0.06;

// --- Per-tick event chances ---

/// Chance per tick that a walker vanishes on its own.
pub const LINEAR_HIDE_CHANCE: f64 = 0.0008;

/// Chance per tick that a circler picks a new orbit.
pub const CIRCULAR_RECENTER_CHANCE: f64 = 0.001;

/// Chance per tick that a circler vanishes on its own.
pub const CIRCULAR_HIDE_CHANCE: f64 = 0.0006;

/// Probability that a freshly populated enemy is a zombie.
pub const ZOMBIE_SPAWN_CHANCE: f64 = 0.55;

// --- Respawn timers (seconds) ---

pub const HIDE_TIMER_MIN: f64 = 0.8;
pub const HIDE_TIMER_MAX: f64 = 2.5;

pub const SHOT_TIMER_MIN: f64 = 0.6;
pub const SHOT_TIMER_MAX: f64 = 2.0;

// --- Scoring ---

pub const ZOMBIE_POINTS: u32 = 10;
pub const MUMMY_POINTS: u32 = 15;

// --- Loop ---

/// Number of enemies on the board after a reset or the initial load.
pub const POPULATION_COUNT: usize = 8;

/// Upper bound on the per-frame delta time (seconds).
pub const MAX_FRAME_DT: f64 = 0.05;

/// Default host frame rate (Hz).
pub const FRAME_RATE: u32 = 60;

// --- Messages ---

pub const MESSAGE_DEFAULT_MILLIS: u32 = 1500;
pub const MESSAGE_STARTED_MILLIS: u32 = 1000;
pub const MESSAGE_WELCOME_MILLIS: u32 = 2500;
