//! Chase Camera Module
//!
//! Third-person camera that trails the character from behind and above.
//! The camera position is exponentially smoothed toward an ideal offset
//! rotated by the character's facing; the look direction is instantaneous.
//! This is window-system agnostic - it only manages camera state.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Trailing distance behind the character in meters
pub const CHASE_DISTANCE: f32 = 5.0;

/// Height above the character in meters
pub const CHASE_HEIGHT: f32 = 2.0;

/// Position smoothing rate (higher = snappier follow)
pub const CHASE_SMOOTHNESS: f32 = 5.0;

/// How far above the character origin the camera looks, in meters
pub const LOOK_HEIGHT: f32 = 1.0;

/// Chase camera parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaseCameraConfig {
    /// Trailing distance behind the target in meters
    pub distance: f32,
    /// Height above the target in meters
    pub height: f32,
    /// Smoothing rate toward the ideal position (higher = snappier)
    pub smoothness: f32,
    /// Look target offset above the character origin in meters
    pub look_height: f32,
}

impl Default for ChaseCameraConfig {
    fn default() -> Self {
        Self {
            distance: CHASE_DISTANCE,
            height: CHASE_HEIGHT,
            smoothness: CHASE_SMOOTHNESS,
            look_height: LOOK_HEIGHT,
        }
    }
}

/// Chase camera state.
///
/// Each tick, [`ChaseCamera::update`] moves the camera toward the ideal
/// trailing position computed from the target's position and yaw. Pure
/// function of its inputs, no failure modes.
#[derive(Debug, Clone, Copy)]
pub struct ChaseCamera {
    /// Current camera position in world space
    pub position: Vec3,
    /// Camera parameters
    pub config: ChaseCameraConfig,
}

impl Default for ChaseCamera {
    fn default() -> Self {
        let config = ChaseCameraConfig::default();
        Self {
            // Start at the ideal offset for a target at the origin facing -Z
            position: Vec3::new(0.0, config.height, config.distance),
            config,
        }
    }
}

impl ChaseCamera {
    /// Create a chase camera with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chase camera with custom parameters, starting at the ideal
    /// offset for a target at the origin.
    pub fn with_config(config: ChaseCameraConfig) -> Self {
        Self {
            position: Vec3::new(0.0, config.height, config.distance),
            config,
        }
    }

    /// Ideal camera position for a target at `target_position` facing
    /// `target_yaw`: the configured offset rotated about the vertical axis.
    pub fn ideal_position(&self, target_position: Vec3, target_yaw: f32) -> Vec3 {
        let offset =
            Quat::from_rotation_y(target_yaw) * Vec3::new(0.0, self.config.height, self.config.distance);
        target_position + offset
    }

    /// The point the camera looks at: slightly above the character origin.
    /// Look direction is never smoothed.
    pub fn look_target(&self, target_position: Vec3) -> Vec3 {
        target_position + Vec3::new(0.0, self.config.look_height, 0.0)
    }

    /// Move the camera toward the ideal trailing position.
    ///
    /// The lerp factor is `dt * smoothness` with no clamp; the game loop caps
    /// `dt` at 0.1 s, which keeps the factor well below 1 at the default
    /// smoothness.
    pub fn update(&mut self, target_position: Vec3, target_yaw: f32, dt: f32) {
        let ideal = self.ideal_position(target_position, target_yaw);
        self.position = self.position.lerp(ideal, dt * self.config.smoothness);
    }

    /// Right-handed view matrix looking at the target.
    pub fn view_matrix(&self, target_position: Vec3) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_target(target_position), Vec3::Y)
    }
}
