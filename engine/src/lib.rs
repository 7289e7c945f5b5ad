//! Runner Engine Library
//!
//! A minimal third-person character controller: keyboard-driven movement with
//! jump and gravity, a chase camera, and asynchronous model loading with a
//! placeholder fallback. Rendering and windowing are external collaborators
//! consumed through the [`scene::SceneGraph`] trait.
//!
//! # Modules
//!
//! - [`input`] - Platform-agnostic keyboard input and logical button state
//! - [`player`] - Character motion integration (movement, jump, ground clamp)
//! - [`camera`] - Chase camera trailing the character
//! - [`scene`] - Scene-graph interface and the headless implementation
//! - [`assets`] - Async model loading state machine with timeout fallback
//!
//! # Example
//!
//! ```ignore
//! use runner_engine::game::RunnerGame;
//! use runner_engine::input::KeyCode;
//! use runner_engine::scene::HeadlessScene;
//!
//! let mut game = RunnerGame::new(HeadlessScene::new(), Default::default());
//!
//! // Each frame: feed key events, then tick.
//! game.key_event(KeyCode::W, true);
//! game.tick(1.0 / 60.0);
//! ```

pub mod assets;
pub mod camera;
pub mod input;
pub mod player;
pub mod scene;

// Game wiring (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used input types
pub use input::{Button, InputState, KeyBindings, KeyCode};
// Re-export character motion types
pub use player::{CharacterState, MotionConfig, MotionController};
// Re-export camera types
pub use camera::{ChaseCamera, ChaseCameraConfig};
