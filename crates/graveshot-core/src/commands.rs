//! Player commands sent from the frontend to the game session.
//!
//! Commands are applied between frames, never during one.

use serde::{Deserialize, Serialize};

use crate::types::Viewport;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start button: begin or resume scheduling frames.
    Start,
    /// Stop scheduling frames, keeping the board as is.
    Pause,
    /// Pause button: pause when running, otherwise start.
    TogglePause,
    /// Reset button: stop, zero the score and repopulate the board.
    Reset,
    /// Click on the canvas, in screen space.
    Shoot {
        client_x: f64,
        client_y: f64,
        /// Where the canvas is currently displayed.
        viewport: Viewport,
    },
}
