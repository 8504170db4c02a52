//! Draw pass
//!
//! Renders one frame snapshot with macroquad: every visible sprite offset
//! by the camera, the HUD on top, and the game-over overlay when the
//! session has ended. Read-only over the snapshot; all game state changes
//! happen before this runs.

use macroquad::prelude::*;

use super::session::{Phase, RenderFrame, SpriteKind};

/// Dusk-purple backdrop behind the meadow
const BACKGROUND: Color = Color::new(0.27, 0.20, 0.33, 1.0);

pub fn draw_frame(frame: &RenderFrame) {
    clear_background(BACKGROUND);

    let (cam_x, cam_y) = frame.camera;
    for sprite in &frame.sprites {
        if !sprite.visible {
            continue;
        }
        let color = match sprite.kind {
            SpriteKind::Platform => GREEN,
            SpriteKind::Coin => GOLD,
            SpriteKind::Enemy => PURPLE,
            SpriteKind::Player => {
                if frame.player_invincible {
                    // Hit flash, alternating with the blink frames
                    Color::new(1.0, 0.55, 0.55, 0.9)
                } else {
                    RED
                }
            }
        };
        draw_rectangle(
            sprite.rect.x - cam_x,
            sprite.rect.y - cam_y,
            sprite.rect.w,
            sprite.rect.h,
            color,
        );
    }

    draw_hud(frame);

    if frame.phase == Phase::GameOver {
        draw_game_over();
    }
}

fn draw_hud(frame: &RenderFrame) {
    draw_text(
        &format!("Coins: {}/{}", frame.hud.coins_collected, frame.hud.total_coins),
        16.0,
        28.0,
        24.0,
        WHITE,
    );
    draw_text(&format!("Lives: {}", frame.hud.lives), 16.0, 52.0, 24.0, WHITE);
}

fn draw_game_over() {
    // Dim the world behind the overlay
    draw_rectangle(
        0.0,
        0.0,
        screen_width(),
        screen_height(),
        Color::new(0.0, 0.0, 0.0, 0.6),
    );

    let title = "GAME OVER";
    let title_dims = measure_text(title, None, 64, 1.0);
    draw_text(
        title,
        (screen_width() - title_dims.width) * 0.5,
        screen_height() * 0.5 - 20.0,
        64.0,
        WHITE,
    );

    let hint = "Press Enter to restart";
    let hint_dims = measure_text(hint, None, 28, 1.0);
    draw_text(
        hint,
        (screen_width() - hint_dims.width) * 0.5,
        screen_height() * 0.5 + 30.0,
        28.0,
        LIGHTGRAY,
    );
}
