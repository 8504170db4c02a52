//! Input handling
//!
//! An action-based keyboard layer: key polling lives here, the rest of
//! the game only sees actions and the per-frame `InputFrame` snapshot.

mod actions;
mod state;

pub use actions::Action;
pub use state::{InputFrame, InputState};
