//! Patrolling enemies
//!
//! Enemies walk a fixed horizontal beat around an anchor point. No
//! gravity and no platform interaction: the patrol line is authored into
//! the level and the enemy never leaves it. The patrol bound is enforced
//! by flipping the velocity sign at the boundary, not by clamping, so a
//! patrol may overshoot by one frame's travel before turning around.

use super::rect::Rect;

/// Enemy collision box size in world units
pub const ENEMY_SIZE: f32 = 40.0;

/// A patrolling enemy
#[derive(Debug, Clone, Copy)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    /// Signed horizontal speed
    pub vx: f32,
    /// Patrol anchor; the enemy oscillates around this x
    pub start_x: f32,
    /// Velocity at level load, restored on reset
    pub start_vx: f32,
    /// Half-width of the patrol beat
    pub patrol_distance: f32,
    pub active: bool,
}

impl Enemy {
    pub fn new(x: f32, y: f32, vx: f32, patrol_distance: f32) -> Self {
        Self {
            x,
            y,
            vx,
            start_x: x,
            start_vx: vx,
            patrol_distance,
            active: true,
        }
    }

    /// Current collision box
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, ENEMY_SIZE, ENEMY_SIZE)
    }

    /// Advance the patrol. The two boundary checks are independent, not
    /// exclusive.
    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.x += self.vx * dt;
        if self.x > self.start_x + self.patrol_distance {
            self.vx = -self.vx.abs();
        }
        if self.x < self.start_x - self.patrol_distance {
            self.vx = self.vx.abs();
        }
    }

    /// Overlap test against the player; inactive enemies never collide
    pub fn overlaps_player(&self, player: Rect) -> bool {
        self.active && self.rect().overlaps(&player)
    }

    /// Back to the anchor for a session restart
    pub fn reset(&mut self) {
        self.x = self.start_x;
        self.vx = self.start_vx;
        self.active = true;
    }
}
