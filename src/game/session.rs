//! Game session
//!
//! The session controller owns all mutable game state (player, coins,
//! enemies, camera) and drives the per-frame update order: input, player
//! physics, coin pickups, enemy patrols, damage, camera follow. A small
//! two-state machine separates play from the game-over screen, and a
//! restart rebuilds the player and revives every coin and enemy in place.
//!
//! The session never draws. Each frame it hands the renderer a read-only
//! snapshot with one uniform sprite list covering platforms, coins,
//! enemies and the player.

use super::camera::Camera;
use super::coin::Coin;
use super::enemy::Enemy;
use super::event::{CoinCollectedEvent, DamageEvent, DeathEvent, Events, RestartEvent};
use super::level::Level;
use super::player::Player;
use super::rect::Rect;
use crate::input::InputFrame;

/// Which screen the session is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// What a sprite represents, for draw styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Platform,
    Coin,
    Enemy,
    Player,
}

/// One drawable: a rectangle, what it is, and whether to show it
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    pub rect: Rect,
    pub kind: SpriteKind,
    pub visible: bool,
}

/// HUD values for the frame
#[derive(Debug, Clone, Copy)]
pub struct Hud {
    pub coins_collected: u32,
    pub total_coins: u32,
    pub lives: u32,
}

/// Read-only world snapshot handed to the renderer each frame
pub struct RenderFrame {
    pub phase: Phase,
    /// Camera offset subtracted from every sprite
    pub camera: (f32, f32),
    pub sprites: Vec<Sprite>,
    pub hud: Hud,
    pub player_invincible: bool,
}

/// The running game: one player, one level, and the session state machine
pub struct Session {
    pub level: Level,
    pub player: Player,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
    pub camera: Camera,
    pub phase: Phase,
    pub events: Events,
    /// Set once a quit input arrives; the frame loop exits on it
    pub quit_requested: bool,
}

impl Session {
    pub fn new(level: Level) -> Self {
        let player = Player::new(&level.tuning);
        let coins = level.spawn_coins();
        let enemies = level.spawn_enemies();
        Self {
            level,
            player,
            coins,
            enemies,
            camera: Camera::new(),
            phase: Phase::Playing,
            events: Events::new(),
            quit_requested: false,
        }
    }

    /// One frame of the session
    pub fn update(&mut self, input: &InputFrame, dt: f32) {
        if input.quit {
            self.quit_requested = true;
            return;
        }
        match self.phase {
            Phase::Playing => self.update_playing(input, dt),
            Phase::GameOver => {
                // Everything is frozen; only the restart input matters
                if input.restart {
                    self.restart();
                }
            }
        }
    }

    fn update_playing(&mut self, input: &InputFrame, dt: f32) {
        // Discrete edges land before held movement, both before physics
        if input.jump {
            self.player.jump(&self.level.tuning);
        }
        if input.move_left {
            self.player.move_left(input.sprint, &self.level.tuning);
        } else if input.move_right {
            self.player.move_right(input.sprint, &self.level.tuning);
        } else {
            self.player.stop();
        }

        let lives_before = self.player.lives;
        self.player.update(dt, &self.level);

        // Coin sweep against the post-move player rectangle
        let player_rect = self.player.rect();
        for coin in &mut self.coins {
            if coin.overlaps_player(player_rect) {
                coin.collect();
                self.player.collect_coin();
                self.events.coin_collected.send(CoinCollectedEvent {
                    collected: self.player.coins_collected,
                    total: self.level.total_coins(),
                });
            }
        }

        for enemy in &mut self.enemies {
            enemy.update(dt);
        }

        // At most one enemy hit per frame: first overlap wins
        if self.player.alive && !self.player.is_invincible() {
            let player_rect = self.player.rect();
            for enemy in &self.enemies {
                if enemy.overlaps_player(player_rect) {
                    self.player.take_damage(&self.level.tuning);
                    break;
                }
            }
        }

        // A single life can be lost per frame, whether to an enemy or to
        // falling out of the world
        if self.player.lives < lives_before {
            self.events.damage.send(DamageEvent {
                lives_left: self.player.lives,
            });
        }

        self.camera
            .follow(self.player.rect(), self.level.world_w, self.level.world_h);

        if !self.player.alive {
            self.events.death.send(DeathEvent {
                coins_collected: self.player.coins_collected,
            });
            self.phase = Phase::GameOver;
        }
    }

    /// Rebuild the player and revive every coin and enemy in place
    pub fn restart(&mut self) {
        self.player = Player::new(&self.level.tuning);
        for coin in &mut self.coins {
            coin.reset();
        }
        for enemy in &mut self.enemies {
            enemy.reset();
        }
        self.phase = Phase::Playing;
        self.events.restart.send(RestartEvent);
    }

    /// Snapshot the world for the render pass
    pub fn render_frame(&self) -> RenderFrame {
        let mut sprites =
            Vec::with_capacity(self.level.platforms.len() + self.coins.len() + self.enemies.len() + 1);

        for platform in &self.level.platforms {
            sprites.push(Sprite {
                rect: *platform,
                kind: SpriteKind::Platform,
                visible: true,
            });
        }
        for coin in &self.coins {
            sprites.push(Sprite {
                rect: coin.rect(),
                kind: SpriteKind::Coin,
                visible: !coin.collected,
            });
        }
        for enemy in &self.enemies {
            sprites.push(Sprite {
                rect: enemy.rect(),
                kind: SpriteKind::Enemy,
                visible: enemy.active,
            });
        }

        // Invincibility reads as a blink, derived from the remaining time
        let blinked_out =
            self.player.is_invincible() && (self.player.invincibility_remaining * 10.0) as i32 % 2 == 1;
        sprites.push(Sprite {
            rect: self.player.rect(),
            kind: SpriteKind::Player,
            visible: self.player.alive && !blinked_out,
        });

        RenderFrame {
            phase: self.phase,
            camera: (self.camera.x, self.camera.y),
            sprites,
            hud: Hud {
                coins_collected: self.player.coins_collected,
                total_coins: self.level.total_coins(),
                lives: self.player.lives,
            },
            player_invincible: self.player.is_invincible(),
        }
    }
}
