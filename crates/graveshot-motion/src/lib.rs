//! Enemy behavior for Graveshot.
//!
//! Implements the enemy motion/visibility state machine and the random
//! sampling helpers it is built on. Pure functions over plain data:
//! no ECS dependency, the caller supplies the random source.

pub mod enemy;
pub mod sampling;
pub mod tuning;

pub use graveshot_core as core;
pub use tuning::MotionTuning;

#[cfg(test)]
mod tests;
