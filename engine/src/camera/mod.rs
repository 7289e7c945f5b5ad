//! Camera Module
//!
//! Chase camera that trails the player character.

pub mod chase;

pub use chase::{ChaseCamera, ChaseCameraConfig};
