//! Game session for Graveshot.
//!
//! Owns the hecs world holding the enemy population, drives the
//! start/pause/reset loop state machine, runs the per-frame systems and
//! produces GameStateSnapshots for the frontend. Headless: the host
//! supplies the clock, frame scheduling, sprites and drawing surface.

pub mod engine;
pub mod host;
pub mod input;
pub mod systems;
pub mod world_setup;

pub use engine::{GameSession, SessionConfig};
pub use graveshot_core as core;
