//! Camera follow
//!
//! Centers the view on the player and clamps it to the world bounds. The
//! offset it yields is subtracted from every sprite at draw time.

use super::level::{SCREEN_HEIGHT, SCREEN_WIDTH};
use super::rect::Rect;

/// World-space offset of the visible screen
#[derive(Debug, Clone, Copy, Default)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Center on the target rectangle, clamped to the world
    pub fn follow(&mut self, target: Rect, world_w: f32, world_h: f32) {
        self.x = (target.center_x() - SCREEN_WIDTH * 0.5).clamp(0.0, world_w - SCREEN_WIDTH);
        self.y = (target.center_y() - SCREEN_HEIGHT * 0.5).clamp(0.0, world_h - SCREEN_HEIGHT);
    }
}
