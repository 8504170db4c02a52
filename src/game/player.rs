//! Player actor
//!
//! Owns position, velocity, lives, invincibility and the coin count.
//! Physics is axis-separated: X moves and resolves first, then Y, each
//! against the static platform set through the collision module. Ground
//! contact is re-derived every frame, with a thin probe under the feet
//! catching the resting-exactly-on-a-surface case.

use super::collision::{resolve_penetration, Resolution};
use super::level::Level;
use super::rect::Rect;
use super::tuning::Tuning;

/// Player collision box size in world units
pub const PLAYER_SIZE: f32 = 50.0;
/// Fixed spawn point
pub const SPAWN_X: f32 = 100.0;
pub const SPAWN_Y: f32 = 100.0;
/// Below this vertical speed the grounded probe runs
const PROBE_SPEED: f32 = 1.0;

/// The player-controlled actor
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Resting on top of a platform; gravity is suspended
    pub on_ground: bool,
    /// Sprint eligibility, captured from on_ground before movement
    pub can_sprint: bool,
    pub lives: u32,
    pub coins_collected: u32,
    pub alive: bool,
    /// Seconds of damage immunity left after a hit
    pub invincibility_remaining: f32,
}

impl Player {
    /// A fresh player at the spawn point
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: SPAWN_X,
            y: SPAWN_Y,
            vx: 0.0,
            vy: 0.0,
            on_ground: false,
            can_sprint: true,
            lives: tuning.starting_lives,
            coins_collected: 0,
            alive: true,
            invincibility_remaining: 0.0,
        }
    }

    /// Current collision box
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_SIZE, PLAYER_SIZE)
    }

    /// One simulation step against the level's platforms
    pub fn update(&mut self, dt: f32, level: &Level) {
        let tuning = &level.tuning;

        self.invincibility_remaining = (self.invincibility_remaining - dt).max(0.0);

        if !self.on_ground {
            self.vy += tuning.gravity * dt;
        }

        // Captured before movement: a sprint started mid-air never engages
        self.can_sprint = self.on_ground;

        // X axis: integrate, then resolve against the first overlapping
        // platform only
        self.x += self.vx * dt;
        for platform in &level.platforms {
            if self.rect().overlaps(platform) {
                self.apply(resolve_penetration(self.rect(), *platform, self.vx, self.vy));
                break;
            }
        }

        // Y axis: integrate, drop the ground flag, then resolve against
        // every platform; later corrections override earlier ones
        self.y += self.vy * dt;
        self.on_ground = false;
        for platform in &level.platforms {
            if self.rect().overlaps(platform) {
                self.apply(resolve_penetration(self.rect(), *platform, self.vx, self.vy));
            }
        }

        // Near-zero vertical speed can leave the flag unset while resting
        // exactly on a surface; probe a thin strip under the feet
        if !self.on_ground && self.vy.abs() < PROBE_SPEED {
            let feet = Rect::new(self.x, self.y + PLAYER_SIZE - 1.0, PLAYER_SIZE, 2.0);
            for platform in &level.platforms {
                if feet.overlaps(platform) {
                    self.on_ground = true;
                    break;
                }
            }
        }

        // World bounds: walls on both sides, damage past the bottom
        self.x = self.x.clamp(0.0, level.world_w - PLAYER_SIZE);
        if self.y > level.world_h {
            self.take_damage(tuning);
        }
    }

    fn apply(&mut self, resolution: Resolution) {
        self.x = resolution.x;
        self.y = resolution.y;
        self.vx = resolution.vx;
        self.vy = resolution.vy;
        if resolution.grounded {
            self.on_ground = true;
        }
    }

    /// Jump if grounded; no double jump
    pub fn jump(&mut self, tuning: &Tuning) {
        if self.on_ground {
            self.vy = -tuning.jump_impulse;
            self.on_ground = false;
        }
    }

    pub fn move_left(&mut self, sprinting: bool, tuning: &Tuning) {
        self.vx = if sprinting && self.can_sprint {
            -tuning.sprint_speed
        } else {
            -tuning.walk_speed
        };
    }

    pub fn move_right(&mut self, sprinting: bool, tuning: &Tuning) {
        self.vx = if sprinting && self.can_sprint {
            tuning.sprint_speed
        } else {
            tuning.walk_speed
        };
    }

    pub fn stop(&mut self) {
        self.vx = 0.0;
    }

    /// Lose a life, gain an invincibility window, respawn or die.
    /// No-op while invincible or already dead.
    pub fn take_damage(&mut self, tuning: &Tuning) {
        if self.is_invincible() || !self.alive {
            return;
        }
        self.lives = self.lives.saturating_sub(1);
        self.invincibility_remaining = tuning.invincibility_window;
        if self.lives == 0 {
            self.alive = false;
        } else {
            // Respawn leaves on_ground as-is; the probe re-grounds the
            // actor within a frame
            self.x = SPAWN_X;
            self.y = SPAWN_Y;
            self.vx = 0.0;
            self.vy = 0.0;
        }
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility_remaining > 0.0
    }

    pub fn collect_coin(&mut self) {
        self.coins_collected += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    /// One ground platform, no coins, no enemies
    fn ground_level() -> Level {
        Level {
            platforms: vec![Rect::new(0.0, 580.0, 800.0, 20.0)],
            coin_spawns: vec![],
            enemy_spawns: vec![],
            world_w: 1600.0,
            world_h: 1200.0,
            tuning: Tuning::default(),
        }
    }

    #[test]
    fn test_gravity_fall_lands_on_ground() {
        let level = ground_level();
        let mut player = Player::new(&level.tuning);

        for _ in 0..180 {
            player.update(DT, &level);
        }

        assert_eq!(player.y, 530.0);
        assert_eq!(player.vy, 0.0);
        assert!(player.on_ground);
    }

    #[test]
    fn test_jump_only_from_ground() {
        let level = ground_level();
        let mut player = Player::new(&level.tuning);

        // Airborne at spawn: jump is a no-op
        player.jump(&level.tuning);
        assert_eq!(player.vy, 0.0);

        for _ in 0..180 {
            player.update(DT, &level);
        }
        assert!(player.on_ground);

        player.jump(&level.tuning);
        assert_eq!(player.vy, -500.0);
        assert!(!player.on_ground);

        // Still rising: no double jump
        player.jump(&level.tuning);
        assert_eq!(player.vy, -500.0);
    }

    #[test]
    fn test_sprint_requires_ground_contact() {
        let level = ground_level();
        let mut player = Player::new(&level.tuning);

        for _ in 0..180 {
            player.update(DT, &level);
        }
        assert!(player.can_sprint);

        player.move_right(true, &level.tuning);
        assert_eq!(player.vx, 350.0);

        player.jump(&level.tuning);
        player.update(DT, &level);
        assert!(!player.can_sprint);

        player.move_right(true, &level.tuning);
        assert_eq!(player.vx, 200.0);

        player.move_left(false, &level.tuning);
        assert_eq!(player.vx, -200.0);

        player.stop();
        assert_eq!(player.vx, 0.0);
    }

    #[test]
    fn test_world_clamp() {
        let level = ground_level();
        let mut player = Player::new(&level.tuning);
        player.x = 5.0;
        player.vx = -10_000.0;
        player.update(DT, &level);
        assert_eq!(player.x, 0.0);

        player.x = level.world_w - PLAYER_SIZE - 5.0;
        player.vx = 10_000.0;
        player.update(DT, &level);
        assert_eq!(player.x, level.world_w - PLAYER_SIZE);
    }

    #[test]
    fn test_fall_out_takes_damage_and_respawns() {
        let level = ground_level();
        let mut player = Player::new(&level.tuning);
        player.y = level.world_h + 10.0;

        player.update(DT, &level);
        assert_eq!(player.lives, 2);
        assert_eq!((player.x, player.y), (SPAWN_X, SPAWN_Y));
        assert_eq!((player.vx, player.vy), (0.0, 0.0));
        assert!(player.is_invincible());
    }

    #[test]
    fn test_damage_respawn_and_invincibility_window() {
        let level = ground_level();
        let mut player = Player::new(&level.tuning);
        player.x = 400.0;
        player.y = 300.0;

        player.take_damage(&level.tuning);
        assert_eq!(player.lives, 2);
        assert_eq!(player.invincibility_remaining, 2.0);
        assert_eq!((player.x, player.y), (SPAWN_X, SPAWN_Y));

        // Half a second later, still invincible: no effect
        player.invincibility_remaining -= 0.5;
        player.take_damage(&level.tuning);
        assert_eq!(player.lives, 2);
    }

    #[test]
    fn test_three_hits_with_one_ignored() {
        let level = ground_level();
        let mut player = Player::new(&level.tuning);

        player.take_damage(&level.tuning);
        assert_eq!(player.lives, 2);

        // Second hit inside the window is ignored
        player.take_damage(&level.tuning);
        assert_eq!(player.lives, 2);

        // Window fully elapsed before the third
        player.invincibility_remaining = 0.0;
        player.take_damage(&level.tuning);
        assert_eq!(player.lives, 1);
    }

    #[test]
    fn test_final_hit_is_terminal() {
        let level = ground_level();
        let mut player = Player::new(&level.tuning);
        player.lives = 1;

        player.take_damage(&level.tuning);
        assert!(!player.alive);
        assert_eq!(player.lives, 0);

        // Dead players stop taking damage entirely
        player.invincibility_remaining = 0.0;
        player.take_damage(&level.tuning);
        assert_eq!(player.lives, 0);
        assert!(!player.alive);
    }

    #[test]
    fn test_wall_stops_horizontal_motion() {
        let mut level = ground_level();
        // A wall rising from the ground
        level.platforms.push(Rect::new(400.0, 380.0, 40.0, 200.0));
        let mut player = Player::new(&level.tuning);

        for _ in 0..180 {
            player.update(DT, &level);
        }
        assert!(player.on_ground);

        // Run right into the wall
        for _ in 0..240 {
            player.move_right(false, &level.tuning);
            player.update(DT, &level);
        }
        assert_eq!(player.x, 350.0);
        assert_eq!(player.vx, 0.0);
    }

    #[test]
    fn test_coin_counter() {
        let level = ground_level();
        let mut player = Player::new(&level.tuning);
        player.collect_coin();
        player.collect_coin();
        assert_eq!(player.coins_collected, 2);
    }
}
