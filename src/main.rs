//! COINDASH: a 2D side-scrolling platformer
//!
//! Run, jump and sprint across floating platforms, grab every coin and
//! stay off the patrol routes. Three lives, then it's over; Enter brings
//! the meadow back.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod game;
mod input;

use macroquad::prelude::*;
use std::path::Path;

use game::{draw_frame, load_tuning, Level, Session, Tuning, SCREEN_HEIGHT, SCREEN_WIDTH};
use input::InputState;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("COINDASH v{}", VERSION),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    println!("=== COINDASH v{} ===", VERSION);

    let tuning = match load_tuning(Path::new("assets/tuning.ron")) {
        Ok(tuning) => {
            println!("Loaded physics tuning from assets/tuning.ron");
            tuning
        }
        Err(e) => {
            println!("Using default tuning ({})", e);
            Tuning::default()
        }
    };

    let input = InputState::new();
    let mut session = Session::new(Level::meadow(tuning));

    println!("A/D or arrows to move, Shift to sprint, Space to jump, Esc to quit.");

    loop {
        let dt = get_frame_time();
        let frame = input.sample();

        session.update(&frame, dt);
        if session.quit_requested {
            break;
        }

        // Console feedback for the frame's game events
        for e in session.events.coin_collected.drain() {
            println!("Coin collected ({}/{})", e.collected, e.total);
        }
        for e in session.events.damage.drain() {
            println!("Hit! {} lives left", e.lives_left);
        }
        for e in session.events.death.drain() {
            println!("Game over - {} coins banked", e.coins_collected);
        }
        for _ in session.events.restart.drain() {
            println!("Restarting");
        }

        draw_frame(&session.render_frame());

        next_frame().await;
    }

    println!("Thanks for playing!");
}
