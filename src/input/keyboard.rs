use serde::{Deserialize, Serialize};

use crate::camera::MoveDirection;

/// Actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// KeyW = "move_forward"
/// Space = "feed"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Walk along the viewing direction while held.
    MoveForward,
    /// Walk backward while held.
    MoveBack,
    /// Strafe left while held.
    MoveLeft,
    /// Strafe right while held.
    MoveRight,
    /// Start a feeding session.
    Feed,
}

impl KeyAction {
    /// Movement direction for held-key actions.
    #[must_use]
    pub fn move_direction(self) -> Option<MoveDirection> {
        match self {
            Self::MoveForward => Some(MoveDirection::Forward),
            Self::MoveBack => Some(MoveDirection::Back),
            Self::MoveLeft => Some(MoveDirection::Left),
            Self::MoveRight => Some(MoveDirection::Right),
            Self::Feed => None,
        }
    }
}
