use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping key codes to actions.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyW"`, `"Space"`, `"Escape"`, etc.
pub struct KeybindingOptions {
    /// Maps key string → action (e.g. `"KeyF"` → `Feed`).
    pub bindings: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyW".into(), KeyAction::MoveForward),
            ("KeyA".into(), KeyAction::MoveLeft),
            ("KeyS".into(), KeyAction::MoveBack),
            ("KeyD".into(), KeyAction::MoveRight),
            ("KeyF".into(), KeyAction::Feed),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings.get(key).copied()
    }

    /// Bind `key` to `action`, dropping any keys previously bound to it.
    /// Returns the dropped keys.
    pub fn rebind(
        &mut self,
        action: KeyAction,
        key: impl Into<String>,
    ) -> Vec<String> {
        let previous: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| key.clone())
            .collect();
        for key in &previous {
            let _ = self.bindings.remove(key);
        }
        let _ = self.bindings.insert(key.into(), action);
        previous
    }
}
