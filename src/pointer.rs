//! Pointer state shared between input handling and the scenes.

use glam::Vec2;

/// Latest pointer position in logical pixels, plus whether the pointer is
/// currently over the canvas. Mouse and touch both feed this.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

impl PointerState {
    pub fn moved(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.active = true;
    }

    pub fn left(&mut self) {
        self.active = false;
    }

    /// Position if the pointer is over the canvas.
    pub fn position(&self) -> Option<Vec2> {
        self.active.then(|| Vec2::new(self.x, self.y))
    }
}
