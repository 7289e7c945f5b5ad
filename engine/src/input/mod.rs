//! Input Module
//!
//! Platform-agnostic keyboard input handling. Raw window-system key events are
//! translated into generic [`KeyCode`]s by the windowing collaborator, routed
//! through [`KeyBindings`] to logical [`Button`]s, and accumulated in
//! [`InputState`] for the simulation tick to sample.

pub mod bindings;
pub mod buttons;
pub mod keyboard;

pub use bindings::KeyBindings;
pub use buttons::{Button, InputState};
pub use keyboard::KeyCode;
