/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`AquariaCommand`](crate::engine::AquariaCommand)
/// values.
///
/// # Example
///
/// ```
/// use aquaria::input::{InputEvent, InputProcessor};
///
/// let mut input = InputProcessor::default();
/// let commands = input.frame_commands(&[
///     InputEvent::KeyPressed { key: "KeyW".into() },
///     InputEvent::CursorMoved { x: 100.0, y: 200.0 },
/// ]);
/// assert_eq!(commands.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Physical key went down (repeats allowed).
    KeyPressed {
        /// Key code in `winit::keyboard::KeyCode` debug format.
        key: String,
    },
    /// Physical key went up.
    KeyReleased {
        /// Key code in `winit::keyboard::KeyCode` debug format.
        key: String,
    },
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels, growing downward.
        y: f32,
    },
    /// Relative pointer motion (raw device delta).
    PointerDelta {
        /// Horizontal motion, positive to the right.
        dx: f32,
        /// Vertical motion, positive downward.
        dy: f32,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
    /// The window lost focus; held keys are released.
    FocusLost,
}
