//! Screen-space to canvas-space mapping for clicks.

use glam::DVec2;

use graveshot_core::types::{Arena, Viewport};

/// Map a click in screen coordinates onto the arena.
///
/// The canvas may be displayed scaled, so the offset inside the viewport is
/// rescaled to the arena's size. Returns `None` for a collapsed viewport.
pub fn to_canvas(client_x: f64, client_y: f64, viewport: &Viewport, arena: &Arena) -> Option<DVec2> {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return None;
    }
    let x = (client_x - viewport.left) / viewport.width * arena.width;
    let y = (client_y - viewport.top) / viewport.height * arena.height;
    Some(DVec2::new(x, y))
}
