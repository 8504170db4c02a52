//! Level data
//!
//! The level is compiled-in literal data: platform rectangles, coin and
//! enemy placements, world bounds, plus the physics tuning that travels
//! with the level. Platform geometry is immutable for the level's
//! lifetime and shared read-only between the collision routine and the
//! render pass.

use super::coin::Coin;
use super::enemy::Enemy;
use super::rect::Rect;
use super::tuning::Tuning;

/// Visible screen size in world units
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;
/// Scrollable world size; the camera clamps to this
pub const WORLD_WIDTH: f32 = 1600.0;
pub const WORLD_HEIGHT: f32 = 1200.0;

/// Where an enemy patrols from
#[derive(Debug, Clone, Copy)]
pub struct EnemySpawn {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub patrol_distance: f32,
}

/// A complete level: static geometry and entity placements
#[derive(Debug, Clone)]
pub struct Level {
    pub platforms: Vec<Rect>,
    pub coin_spawns: Vec<(f32, f32)>,
    pub enemy_spawns: Vec<EnemySpawn>,
    pub world_w: f32,
    pub world_h: f32,
    pub tuning: Tuning,
}

impl Level {
    /// The shipped level: a meadow of floating platforms over a long drop,
    /// stretched across a two-screen-wide world
    pub fn meadow(tuning: Tuning) -> Self {
        let platforms = vec![
            Rect::new(200.0, 400.0, 400.0, 20.0),  // main platform
            Rect::new(100.0, 300.0, 200.0, 20.0),  // upper left
            Rect::new(500.0, 250.0, 200.0, 20.0),  // upper right
            Rect::new(0.0, 580.0, 800.0, 20.0),    // ground, west half
            Rect::new(50.0, 500.0, 100.0, 20.0),   // small step
            Rect::new(650.0, 450.0, 100.0, 20.0),  // ledge by the gap
            Rect::new(900.0, 580.0, 700.0, 20.0),  // ground, east half
            Rect::new(950.0, 430.0, 250.0, 20.0),  // east shelf
            Rect::new(1300.0, 330.0, 200.0, 20.0), // far tower top
        ];

        let coin_spawns = vec![
            (390.0, 370.0),
            (180.0, 270.0),
            (580.0, 220.0),
            (90.0, 470.0),
            (690.0, 420.0),
            (1060.0, 400.0),
            (1390.0, 300.0),
            (1200.0, 550.0),
        ];

        let enemy_spawns = vec![
            EnemySpawn {
                x: 300.0,
                y: 540.0,
                vx: 100.0,
                patrol_distance: 150.0,
            },
            EnemySpawn {
                x: 350.0,
                y: 360.0,
                vx: 80.0,
                patrol_distance: 120.0,
            },
            EnemySpawn {
                x: 1150.0,
                y: 540.0,
                vx: 120.0,
                patrol_distance: 200.0,
            },
        ];

        Self {
            platforms,
            coin_spawns,
            enemy_spawns,
            world_w: WORLD_WIDTH,
            world_h: WORLD_HEIGHT,
            tuning,
        }
    }

    /// Fresh coins at their placements
    pub fn spawn_coins(&self) -> Vec<Coin> {
        self.coin_spawns
            .iter()
            .map(|&(x, y)| Coin::new(x, y))
            .collect()
    }

    /// Fresh enemies at their anchors
    pub fn spawn_enemies(&self) -> Vec<Enemy> {
        self.enemy_spawns
            .iter()
            .map(|s| Enemy::new(s.x, s.y, s.vx, s.patrol_distance))
            .collect()
    }

    pub fn total_coins(&self) -> u32 {
        self.coin_spawns.len() as u32
    }
}
