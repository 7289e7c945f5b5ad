//! Character Motion Integrator
//!
//! Per-tick state update for the single player character: jump impulse,
//! gravity, input-driven horizontal movement, facing interpolation, and
//! ground clamping.
//!
//! # Physics Model
//!
//! - Move speed: 5.0 m/s (horizontal motion is computed directly from input
//!   each tick, not integrated from a persistent horizontal velocity)
//! - Jump impulse: 10.0 m/s
//! - Gravity: 20.0 m/s^2, applied only while airborne
//! - Turn speed: 2.0 (exponential approach rate toward the intent direction)
//!
//! # Usage
//!
//! ```rust,ignore
//! use runner_engine::player::{CharacterState, MotionController};
//!
//! let controller = MotionController::new();
//! let mut character = CharacterState::spawn(&controller.config);
//!
//! // Each frame:
//! controller.update(&mut character, &input, delta_time);
//! ```

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::input::{Button, InputState};

/// Move speed in meters per second
pub const MOVE_SPEED: f32 = 5.0;

/// Turn interpolation rate (higher = snappier facing changes)
pub const TURN_SPEED: f32 = 2.0;

/// Upward velocity applied on jump, in meters per second
pub const JUMP_IMPULSE: f32 = 10.0;

/// Gravity acceleration in meters per second squared
pub const GRAVITY: f32 = 20.0;

/// Y coordinate of the ground plane
pub const GROUND_LEVEL: f32 = 0.0;

/// Half the character's height; feet rest at `GROUND_LEVEL`,
/// origin at `GROUND_LEVEL + HALF_HEIGHT`
pub const HALF_HEIGHT: f32 = 1.0;

/// Tunable parameters for character motion.
///
/// `Default` matches the constants above; a config file can override any of
/// them individually.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Horizontal move speed in m/s
    pub move_speed: f32,
    /// Facing interpolation rate
    pub turn_speed: f32,
    /// Upward velocity applied on jump in m/s
    pub jump_impulse: f32,
    /// Gravity acceleration in m/s^2
    pub gravity: f32,
    /// Y coordinate of the ground plane
    pub ground_level: f32,
    /// Half the character's height in meters
    pub half_height: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            turn_speed: TURN_SPEED,
            jump_impulse: JUMP_IMPULSE,
            gravity: GRAVITY,
            ground_level: GROUND_LEVEL,
            half_height: HALF_HEIGHT,
        }
    }
}

impl MotionConfig {
    /// Y coordinate the character origin rests at while grounded.
    pub fn floor_y(&self) -> f32 {
        self.ground_level + self.half_height
    }
}

/// Simulation state of the player character.
///
/// Invariants maintained by [`MotionController::update`]:
/// - `position.y >= ground_level + half_height` after every update
/// - `is_grounded` implies `velocity.y == 0.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterState {
    /// World-space position of the character origin (center of the body)
    pub position: Vec3,
    /// Current velocity; only the vertical component is integrated, the
    /// horizontal components are informational (set from input each tick)
    pub velocity: Vec3,
    /// Facing angle in radians, rotation about the vertical axis
    pub yaw: f32,
    /// Whether the character is resting on the ground
    pub is_grounded: bool,
}

impl CharacterState {
    /// Spawn a character standing on the ground at the world origin.
    pub fn spawn(config: &MotionConfig) -> Self {
        Self {
            position: Vec3::new(0.0, config.floor_y(), 0.0),
            velocity: Vec3::ZERO,
            yaw: 0.0,
            is_grounded: true,
        }
    }

    /// World-space forward direction derived from the current yaw.
    pub fn forward(&self) -> Vec3 {
        Quat::from_rotation_y(self.yaw) * Vec3::NEG_Z
    }

    /// World-space right direction derived from the current yaw.
    pub fn right(&self) -> Vec3 {
        Quat::from_rotation_y(self.yaw) * Vec3::X
    }
}

/// Per-tick motion integrator for the player character.
///
/// Pure and deterministic: the same (state, input, dt) always produces the
/// same result, and there are no failure modes. The caller is responsible
/// for clamping `dt` (the game loop caps it at 0.1 s) so a long frame stall
/// cannot tunnel the character through the ground.
#[derive(Debug, Clone, Copy, Default)]
pub struct MotionController {
    /// Motion parameters used by [`MotionController::update`]
    pub config: MotionConfig,
}

impl MotionController {
    /// Create a controller with default motion parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with custom motion parameters.
    pub fn with_config(config: MotionConfig) -> Self {
        Self { config }
    }

    /// Advance the character by one tick.
    ///
    /// Steps run in a fixed order: jump, gravity, horizontal intent, facing
    /// interpolation, translation, vertical integration, ground clamp.
    pub fn update(&self, state: &mut CharacterState, input: &InputState, dt: f32) {
        let cfg = &self.config;

        // Jump. No debounce on the button itself: holding jump while
        // grounded re-triggers on the first grounded frame after landing.
        if input.is_pressed(Button::Jump) && state.is_grounded {
            state.velocity.y = cfg.jump_impulse;
            state.is_grounded = false;
        }

        // Gravity only applies while airborne, so a resting character
        // accumulates no downward velocity.
        if !state.is_grounded {
            state.velocity.y -= cfg.gravity * dt;
        }

        // Horizontal intent from the buttons. Opposite buttons cancel to
        // zero; a non-zero vector is normalized so diagonal movement is not
        // faster than axis-aligned movement.
        let intent = Vec3::new(
            input.axis_x() as f32,
            0.0,
            input.axis_z() as f32,
        )
        .normalize_or_zero();

        if intent != Vec3::ZERO {
            // Turn toward the intent direction, but only when forward or
            // back is held: strafing alone never reorients the character.
            // The guard tests the buttons, not intent.z, so holding
            // forward+back+left (z cancels) still turns toward the strafe
            // direction.
            if input.is_pressed(Button::Forward) || input.is_pressed(Button::Back) {
                let target_yaw = intent.x.atan2(intent.z);
                // Raw angle lerp, no shortest-path wrap. Changing this (or
                // moving translation before the lerp) alters movement feel;
                // both are intentional.
                state.yaw += (target_yaw - state.yaw) * (cfg.turn_speed * dt);
            }
        }

        // Translation uses the yaw updated this same tick.
        let rotation = Quat::from_rotation_y(state.yaw);
        let forward = rotation * Vec3::NEG_Z * (intent.z * cfg.move_speed * dt);
        let right = rotation * Vec3::X * (intent.x * cfg.move_speed * dt);
        state.position += forward;
        state.position += right;

        // Vertical integration.
        state.position.y += state.velocity.y * dt;

        // Ground clamp runs every tick so the grounded flag stays consistent
        // even when nothing moved vertically.
        if state.position.y < cfg.floor_y() {
            state.position.y = cfg.floor_y();
            state.velocity.y = 0.0;
            state.is_grounded = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_on_floor() {
        let config = MotionConfig::default();
        let state = CharacterState::spawn(&config);

        assert_eq!(state.position.y, config.floor_y());
        assert!(state.is_grounded);
        assert_eq!(state.velocity, Vec3::ZERO);
        assert_eq!(state.yaw, 0.0);
    }

    #[test]
    fn test_idle_character_stays_put() {
        let controller = MotionController::new();
        let mut state = CharacterState::spawn(&controller.config);
        let input = InputState::new();

        for _ in 0..100 {
            controller.update(&mut state, &input, 1.0 / 60.0);
        }

        assert_eq!(state.position, Vec3::new(0.0, 1.0, 0.0));
        assert!(state.is_grounded);
        assert_eq!(state.velocity.y, 0.0);
    }

    #[test]
    fn test_forward_faces_negative_z_at_zero_yaw() {
        let config = MotionConfig::default();
        let state = CharacterState::spawn(&config);

        let forward = state.forward();
        assert!(forward.z < -0.99);
        assert!(forward.x.abs() < 0.01);
    }
}
