//! Collectible coins

use super::rect::Rect;

/// Coin collision box size in world units
pub const COIN_SIZE: f32 = 20.0;

/// A static collectible. Collection only flips the flag, so a session
/// restart can bring every coin back.
#[derive(Debug, Clone, Copy)]
pub struct Coin {
    pub x: f32,
    pub y: f32,
    pub collected: bool,
}

impl Coin {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            collected: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, COIN_SIZE, COIN_SIZE)
    }

    /// Overlap test against the player; a collected coin no longer collides
    pub fn overlaps_player(&self, player: Rect) -> bool {
        !self.collected && self.rect().overlaps(&player)
    }

    /// Idempotent
    pub fn collect(&mut self) {
        self.collected = true;
    }

    pub fn reset(&mut self) {
        self.collected = false;
    }
}
