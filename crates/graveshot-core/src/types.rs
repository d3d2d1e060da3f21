//! Fundamental geometric types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{ARENA_HEIGHT, ARENA_WIDTH};

/// Canvas dimensions in pixels. Origin is the top-left corner, y grows down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

impl Arena {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Rectangle inset by `margin` on every side, as (min, max) corners.
    pub fn inset(&self, margin: f64) -> (DVec2, DVec2) {
        (
            DVec2::new(margin, margin),
            DVec2::new(self.width - margin, self.height - margin),
        )
    }

    /// Whether a point lies inside the rectangle inset by `margin` (inclusive).
    pub fn contains_inset(&self, point: DVec2, margin: f64) -> bool {
        let (min, max) = self.inset(margin);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

/// On-screen rectangle the canvas is displayed in (CSS pixels).
///
/// The canvas may be scaled by the page, so clicks are reported in this
/// space and mapped back onto the arena.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}
