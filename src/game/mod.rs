//! Game Wiring
//!
//! Ties the engine pieces together into the per-frame simulation: sample
//! input, integrate character motion, push the transform to the scene, move
//! the chase camera, and let the asset load state resolve.

pub mod config;

use std::path::PathBuf;

use log::debug;

use crate::assets::{AssetLoadState, FileModelSource, spawn_fetch};
use crate::camera::ChaseCamera;
use crate::input::{InputState, KeyBindings, KeyCode};
use crate::player::{CharacterState, MotionController};
use crate::scene::SceneGraph;

pub use config::RunnerConfig;

/// Longest simulated step per tick, in seconds. Frame stalls beyond this are
/// clamped so the character cannot tunnel through the ground.
pub const MAX_TICK_SECONDS: f32 = 0.1;

/// The whole demo: one character, one camera, one load state, one scene.
///
/// Single-threaded and frame-driven; the only asynchronous work is the model
/// fetch, whose result is applied at the start of a later tick.
pub struct RunnerGame<S: SceneGraph> {
    /// Scene collaborator the simulation drives
    pub scene: S,
    /// Logical button state sampled each tick
    pub input: InputState,
    /// Physical key to button mapping
    pub bindings: KeyBindings,
    /// Player character simulation state
    pub character: CharacterState,
    /// Motion integrator
    pub motion: MotionController,
    /// Chase camera trailing the character
    pub camera: ChaseCamera,
    /// Visual representation state (placeholder vs. loaded model)
    pub assets: AssetLoadState,
    load_timeout: f64,
    clock: f64,
}

impl<S: SceneGraph> RunnerGame<S> {
    /// Build the demo world: spawn the character on the ground and attach
    /// the placeholder visual.
    pub fn new(mut scene: S, config: RunnerConfig) -> Self {
        let motion = MotionController::with_config(config.motion);
        let character = CharacterState::spawn(&motion.config);
        let camera = ChaseCamera::with_config(config.camera);
        let assets = AssetLoadState::new(&mut scene);

        Self {
            scene,
            input: InputState::new(),
            bindings: KeyBindings::new(),
            character,
            motion,
            camera,
            assets,
            load_timeout: config.load_timeout_seconds,
            clock: 0.0,
        }
    }

    /// Route a raw key event through the bindings.
    ///
    /// Returns `true` if the key was bound; unknown keys are no-ops.
    pub fn key_event(&mut self, key: KeyCode, pressed: bool) -> bool {
        self.bindings.apply(&mut self.input, key, pressed)
    }

    /// Kick off the background model fetch for `path`.
    pub fn begin_model_load(&mut self, path: PathBuf) {
        debug!("starting model fetch from {}", path.display());
        let rx = spawn_fetch(FileModelSource::new(), path);
        self.assets.begin(rx, self.clock, self.load_timeout);
    }

    /// Advance the simulation by one frame.
    ///
    /// `dt` is clamped to [`MAX_TICK_SECONDS`]; non-positive steps are
    /// skipped entirely (the first frame of a fresh clock has no elapsed
    /// time to simulate).
    pub fn tick(&mut self, dt: f32) {
        let dt = dt.min(MAX_TICK_SECONDS);
        if dt <= 0.0 {
            return;
        }
        self.clock += f64::from(dt);

        // Deliver any completed fetch before simulating, so a freshly
        // swapped-in model gets a transform this same frame.
        self.assets.poll(&mut self.scene, self.clock);

        self.motion.update(&mut self.character, &self.input, dt);

        self.scene.set_transform(
            self.assets.attached_node(),
            self.character.position,
            self.character.yaw + self.assets.visual_yaw_offset(),
        );

        self.camera
            .update(self.character.position, self.character.yaw, dt);
    }

    /// Simulated seconds elapsed since construction.
    pub fn clock(&self) -> f64 {
        self.clock
    }
}
