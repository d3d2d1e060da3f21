//! Systems that operate on the enemy world each frame or click.
//!
//! Systems are plain functions that take the world (`&mut World`, or
//! `&World` when read-only). They do not own state.

pub mod hit;
pub mod movement;
pub mod render;
pub mod snapshot;
