//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (held movement keys
//! and the last cursor position) and the key-binding map. It is the only
//! thing that sits between raw window events and the engine's
//! [`update`](crate::engine::AquariumEngine::update) method.

use std::collections::HashSet;

use super::event::InputEvent;
use super::keyboard::KeyAction;
use super::mouse::PointerTracker;
use crate::camera::MoveDirection;
use crate::engine::AquariaCommand;
use crate::options::KeybindingOptions;

/// Converts raw window events into [`AquariaCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // Once per frame, with the events collected since the last one:
/// let commands = input_processor.frame_commands(&events);
/// let output = engine.update(dt, &commands);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Cursor tracking for absolute pointer positions.
    pointer: PointerTracker,
    /// Movement directions whose keys are currently held.
    held: HashSet<MoveDirection>,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a processor with the given key bindings.
    #[must_use]
    pub fn new(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            ..Self::default()
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Whether the key for `direction` is held.
    #[must_use]
    pub fn is_held(&self, direction: MoveDirection) -> bool {
        self.held.contains(&direction)
    }

    /// Process a raw input event and return zero or one commands.
    ///
    /// Movement keys only update held state here; the resulting moves are
    /// emitted by [`held_moves`](Self::held_moves).
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<AquariaCommand> {
        match event {
            InputEvent::KeyPressed { key } => self.handle_key(key, true),
            InputEvent::KeyReleased { key } => self.handle_key(key, false),
            InputEvent::CursorMoved { x, y } => self
                .pointer
                .handle_position(*x, *y)
                .map(|(dx, dy)| AquariaCommand::Rotate { dx, dy: -dy }),
            InputEvent::PointerDelta { dx, dy } => {
                Some(AquariaCommand::Rotate { dx: *dx, dy: -*dy })
            }
            InputEvent::Scroll { delta } => {
                Some(AquariaCommand::Zoom { delta: *delta })
            }
            InputEvent::FocusLost => {
                self.held.clear();
                self.pointer.reset();
                None
            }
        }
    }

    fn handle_key(&mut self, key: &str, pressed: bool) -> Option<AquariaCommand> {
        let action = self.key_bindings.lookup(key)?;
        match action.move_direction() {
            Some(direction) => {
                if pressed {
                    let _ = self.held.insert(direction);
                } else {
                    let _ = self.held.remove(&direction);
                }
                None
            }
            None if pressed && action == KeyAction::Feed => {
                Some(AquariaCommand::Feed)
            }
            None => None,
        }
    }

    /// One `Move` per held direction, in Forward, Left, Back, Right order.
    #[must_use]
    pub fn held_moves(&self) -> Vec<AquariaCommand> {
        MoveDirection::FRAME_ORDER
            .into_iter()
            .filter(|d| self.held.contains(d))
            .map(|direction| AquariaCommand::Move { direction })
            .collect()
    }

    /// The full command batch for one frame: event-derived commands in
    /// arrival order, then the held moves.
    pub fn frame_commands(&mut self, events: &[InputEvent]) -> Vec<AquariaCommand> {
        let mut commands: Vec<AquariaCommand> =
            events.iter().filter_map(|e| self.handle_event(e)).collect();
        commands.extend(self.held_moves());
        commands
    }
}
