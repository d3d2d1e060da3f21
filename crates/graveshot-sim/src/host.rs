//! Interfaces to the host environment, plus simple implementations.
//!
//! The session never touches a real canvas, image loader or timer. The host
//! hands in implementations of these traits; the desktop shell uses
//! `DrawList`, `SpriteRegistry` and `FrameQueue`, and so do the tests.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use graveshot_core::enums::EnemyKind;
use graveshot_core::state::{DrawCommand, DrawList};

/// Something the render step can draw on.
pub trait RenderSurface {
    /// Wipe the whole canvas.
    fn clear(&mut self, width: f64, height: f64);

    /// Draw the sprite for `kind` with its top-left corner at (`x`, `y`).
    fn draw_sprite(&mut self, kind: EnemyKind, x: f64, y: f64, w: f64, h: f64);
}

/// Resolves whether the image for an enemy kind can be drawn yet.
pub trait SpriteProvider {
    fn is_ready(&self, kind: EnemyKind) -> bool;
}

/// Frame scheduling, in the style of `requestAnimationFrame`.
pub trait FrameScheduler {
    /// Ask for one frame callback. The host later calls
    /// `GameSession::on_frame` with the returned handle.
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a request. Cancelling an unknown handle does nothing.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Identifies one requested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameHandle(pub u64);

/// Scheduler holding at most one pending frame, polled by the host loop.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: Option<FrameHandle>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return the pending frame, if one is due.
    pub fn take_due(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}

/// Readiness set fed by the frontend as each image finishes loading.
#[derive(Debug, Clone, Default)]
pub struct SpriteRegistry {
    ready: HashSet<EnemyKind>,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every sprite already loaded.
    pub fn all_ready() -> Self {
        Self {
            ready: EnemyKind::ALL.into_iter().collect(),
        }
    }

    /// Record that a sprite finished loading. Returns false if it already was.
    pub fn mark_ready(&mut self, kind: EnemyKind) -> bool {
        self.ready.insert(kind)
    }
}

impl SpriteProvider for SpriteRegistry {
    fn is_ready(&self, kind: EnemyKind) -> bool {
        self.ready.contains(&kind)
    }
}

impl RenderSurface for DrawList {
    fn clear(&mut self, width: f64, height: f64) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn draw_sprite(&mut self, kind: EnemyKind, x: f64, y: f64, w: f64, h: f64) {
        self.commands.push(DrawCommand::Sprite { kind, x, y, w, h });
    }
}
