//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether it comes from a key, the pointer or
//! a script, is represented as an `AquariaCommand`. Consumers build commands
//! (usually through the [`InputProcessor`](crate::input::InputProcessor))
//! and pass a frame's batch to
//! [`AquariumEngine::update`](super::AquariumEngine::update).

use crate::camera::MoveDirection;

/// A single per-frame request to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AquariaCommand {
    /// Walk one frame's worth of movement in a direction.
    Move {
        /// Which way to step.
        direction: MoveDirection,
    },
    /// Turn the camera by pointer deltas (positive `dy` pitches up).
    Rotate {
        /// Horizontal delta.
        dx: f32,
        /// Vertical delta.
        dy: f32,
    },
    /// Change the field of view (positive narrows).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },
    /// Start a feeding session if none is active.
    Feed,
}
