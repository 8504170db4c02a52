//! Input state management
//!
//! Polls macroquad's keyboard state behind an action-based API and
//! snapshots it once per frame for the simulation. The snapshot keeps
//! discrete edges (jump, restart, quit) apart from held state (movement,
//! sprint), and the simulation consumes the edges first.

use macroquad::prelude::*;

use super::Action;

/// One frame's worth of input, sampled before the simulation step
#[derive(Debug, Clone, Copy, Default)]
pub struct InputFrame {
    /// Edge-triggered events
    pub quit: bool,
    pub jump: bool,
    pub restart: bool,

    /// Held state
    pub move_left: bool,
    pub move_right: bool,
    pub sprint: bool,
}

/// Keyboard input behind the action API
pub struct InputState;

impl InputState {
    pub fn new() -> Self {
        Self
    }

    /// Snapshot the keyboard for this frame
    pub fn sample(&self) -> InputFrame {
        InputFrame {
            quit: self.action_pressed(Action::Quit),
            jump: self.action_pressed(Action::Jump),
            restart: self.action_pressed(Action::Restart),
            move_left: self.action_down(Action::MoveLeft),
            move_right: self.action_down(Action::MoveRight),
            sprint: self.action_down(Action::Sprint),
        }
    }

    /// Check if an action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
            Action::MoveRight => is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
            Action::Sprint => is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift),
            Action::Jump => {
                is_key_down(KeyCode::Space) || is_key_down(KeyCode::W) || is_key_down(KeyCode::Up)
            }
            Action::Restart => is_key_down(KeyCode::Enter),
            Action::Quit => is_key_down(KeyCode::Escape),
        }
    }

    /// Check if an action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => is_key_pressed(KeyCode::A) || is_key_pressed(KeyCode::Left),
            Action::MoveRight => is_key_pressed(KeyCode::D) || is_key_pressed(KeyCode::Right),
            Action::Sprint => {
                is_key_pressed(KeyCode::LeftShift) || is_key_pressed(KeyCode::RightShift)
            }
            Action::Jump => {
                is_key_pressed(KeyCode::Space)
                    || is_key_pressed(KeyCode::W)
                    || is_key_pressed(KeyCode::Up)
            }
            Action::Restart => is_key_pressed(KeyCode::Enter),
            Action::Quit => is_key_pressed(KeyCode::Escape),
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
