//! Game simulation module
//!
//! Everything that happens per frame lives here: rectangle collision and
//! resolution, the player's physics and damage state, coin pickups, enemy
//! patrols, the camera, and the session state machine that ties them
//! together. Rendering consumes a read-only snapshot produced at the end
//! of each tick; input arrives as a per-frame snapshot from the input
//! module.

pub mod camera;
pub mod coin;
pub mod collision;
pub mod enemy;
pub mod event;
pub mod level;
pub mod player;
pub mod rect;
pub mod renderer;
pub mod session;
pub mod tuning;

// Re-export main types
pub use camera::Camera;
pub use coin::Coin;
pub use enemy::Enemy;
pub use level::{Level, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use player::Player;
pub use rect::Rect;
pub use renderer::draw_frame;
pub use session::{Phase, RenderFrame, Session};
pub use tuning::{load_tuning, Tuning};
