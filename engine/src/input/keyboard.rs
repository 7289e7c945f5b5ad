//! Keyboard Input Module
//!
//! Generic key codes decoupled from any windowing system. The windowing
//! collaborator maps its native key events to these codes; anything it cannot
//! map becomes [`KeyCode::Unknown`] and is ignored downstream.

/// Generic key codes for input, independent of windowing system.
///
/// Only the keys this demo can bind are enumerated; everything else should be
/// reported as [`KeyCode::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,

    // Arrow keys (alternate movement bindings)
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    /// Catch-all for unhandled keys
    Unknown,
}

impl KeyCode {
    /// Map a lowercase key name (as reported by the platform layer) to a
    /// generic key code. Unrecognized names map to [`KeyCode::Unknown`].
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "w" => KeyCode::W,
            "a" => KeyCode::A,
            "s" => KeyCode::S,
            "d" => KeyCode::D,
            " " | "space" => KeyCode::Space,
            "arrowup" => KeyCode::ArrowUp,
            "arrowdown" => KeyCode::ArrowDown,
            "arrowleft" => KeyCode::ArrowLeft,
            "arrowright" => KeyCode::ArrowRight,
            _ => KeyCode::Unknown,
        }
    }
}
