//! Game action definitions

/// All player-facing actions that can be triggered by input
///
/// Keyboard mappings:
/// - A / Left arrow  = MoveLeft
/// - D / Right arrow = MoveRight
/// - Shift           = Sprint (hold)
/// - Space / W / Up  = Jump
/// - Enter           = Restart (game-over screen)
/// - Escape          = Quit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement (held)
    MoveLeft,
    MoveRight,
    Sprint,

    // Discrete (edge-triggered)
    Jump,
    Restart,
    Quit,
}
