//! Player Module
//!
//! Character state and the per-tick motion integrator.

pub mod motion;

pub use motion::{CharacterState, MotionConfig, MotionController};
