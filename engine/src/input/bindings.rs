//! Input Bindings Module
//!
//! Maps physical keys to logical buttons, allowing for future key remapping
//! support. Keys without a binding are silently ignored.

use std::collections::HashMap;

use super::buttons::{Button, InputState};
use super::keyboard::KeyCode;

/// Maps physical keys to logical buttons.
///
/// Game code only ever sees [`Button`]s; rebinding a key never touches the
/// movement logic.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    key_to_button: HashMap<KeyCode, Button>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create bindings with the default key mappings.
    ///
    /// Default bindings:
    /// - W / ArrowUp = Forward
    /// - S / ArrowDown = Back
    /// - A / ArrowLeft = Left
    /// - D / ArrowRight = Right
    /// - Space = Jump
    pub fn new() -> Self {
        let mut bindings = Self {
            key_to_button: HashMap::new(),
        };

        bindings.bind(KeyCode::W, Button::Forward);
        bindings.bind(KeyCode::S, Button::Back);
        bindings.bind(KeyCode::A, Button::Left);
        bindings.bind(KeyCode::D, Button::Right);
        bindings.bind(KeyCode::ArrowUp, Button::Forward);
        bindings.bind(KeyCode::ArrowDown, Button::Back);
        bindings.bind(KeyCode::ArrowLeft, Button::Left);
        bindings.bind(KeyCode::ArrowRight, Button::Right);
        bindings.bind(KeyCode::Space, Button::Jump);

        bindings
    }

    /// Bind a physical key to a logical button.
    ///
    /// Multiple keys may map to the same button (W and ArrowUp both move
    /// forward by default). [`KeyCode::Unknown`] is never bindable.
    pub fn bind(&mut self, key: KeyCode, button: Button) {
        if key == KeyCode::Unknown {
            return;
        }
        self.key_to_button.insert(key, button);
    }

    /// Remove the binding for a specific key.
    pub fn unbind(&mut self, key: KeyCode) {
        self.key_to_button.remove(&key);
    }

    /// Get the button bound to a physical key, if any.
    pub fn button_for(&self, key: KeyCode) -> Option<Button> {
        self.key_to_button.get(&key).copied()
    }

    /// Route a key press/release event into an input state.
    ///
    /// Returns `true` if the key was bound and the state was updated; unbound
    /// keys are no-ops, not errors.
    pub fn apply(&self, input: &mut InputState, key: KeyCode, pressed: bool) -> bool {
        match self.button_for(key) {
            Some(button) => {
                input.set_pressed(button, pressed);
                true
            }
            None => false,
        }
    }
}
