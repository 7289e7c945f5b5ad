//! Logical Button State
//!
//! Tracks the pressed/released status of the five logical buttons the
//! character controller understands. This is pure state storage: the mapping
//! from physical keys to buttons lives in [`super::bindings`], and the
//! translation from platform events to key codes is a collaborator concern.

/// Logical input buttons, independent of physical key mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Move forward (default: W)
    Forward,
    /// Move backward (default: S)
    Back,
    /// Strafe left (default: A)
    Left,
    /// Strafe right (default: D)
    Right,
    /// Jump when grounded (default: Space)
    Jump,
}

/// Current pressed state of the logical buttons.
///
/// Holding a key keeps the corresponding button pressed across ticks,
/// allowing smooth continuous movement.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    forward: bool,
    back: bool,
    left: bool,
    right: bool,
    jump: bool,
}

impl InputState {
    /// Create a new input state with all buttons released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pressed state of a logical button.
    pub fn set_pressed(&mut self, button: Button, pressed: bool) {
        match button {
            Button::Forward => self.forward = pressed,
            Button::Back => self.back = pressed,
            Button::Left => self.left = pressed,
            Button::Right => self.right = pressed,
            Button::Jump => self.jump = pressed,
        }
    }

    /// Check whether a logical button is currently pressed.
    pub fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::Forward => self.forward,
            Button::Back => self.back,
            Button::Left => self.left,
            Button::Right => self.right,
            Button::Jump => self.jump,
        }
    }

    /// Check if any button is currently pressed.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.back || self.left || self.right || self.jump
    }

    /// Movement intent along Z: forward is -1, back is +1.
    ///
    /// Opposite buttons cancel exactly: forward and back held together sum
    /// to zero, with no priority between them.
    pub fn axis_z(&self) -> i32 {
        (self.back as i32) - (self.forward as i32)
    }

    /// Movement intent along X: left is -1, right is +1. Opposites cancel
    /// exactly.
    pub fn axis_x(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }

    /// Reset all buttons to released.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
