//! Asset Load State Machine
//!
//! Owns the character's visual handle exclusively: exactly one scene node
//! (placeholder box or loaded model) is attached at any time, and all swaps
//! happen here in a single place rather than in scattered callbacks.
//!
//! Phases: `Placeholder -> Loading -> {Loaded | Failed}`. Every failure path
//! keeps the placeholder attached; nothing here is fatal to the session.
//!
//! The timeout is cosmetic: when the deadline passes while still loading, a
//! warning is logged once and nothing else changes, so a success arriving
//! late still swaps the model in. An error, by contrast, is terminal: the
//! state moves to `Failed` and no further load attempt is made.

use crossbeam_channel::Receiver;
use log::{info, warn};

use super::loader::{LoadError, LoadMessage};
use crate::scene::{ModelData, NodeId, SceneGraph, Visual};

/// Seconds the load may run before the (cosmetic) timeout warning fires.
pub const LOAD_TIMEOUT_SECONDS: f64 = 5.0;

/// Yaw applied to the loaded model so it faces the same way as the
/// placeholder (the source asset faces +Z, the controller treats -Z as
/// forward).
pub const MODEL_YAW_CORRECTION: f32 = std::f32::consts::PI;

/// Uniform scale normalizing the source asset to the 2 m character height.
pub const MODEL_SCALE_NORMALIZATION: f32 = 0.5;

/// Where the load currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Placeholder attached, no fetch started
    Placeholder,
    /// Fetch in flight, placeholder attached
    Loading,
    /// Model attached, placeholder disposed
    Loaded,
    /// Fetch failed, placeholder attached permanently
    Failed,
}

/// Async load state for the character's visual representation.
///
/// Created with the placeholder attached; [`AssetLoadState::begin`] starts a
/// fetch, and [`AssetLoadState::poll`] (called once per tick) applies
/// whatever the fetch thread has delivered. Time is caller-supplied seconds
/// so the tick driver owns the clock.
#[derive(Debug)]
pub struct AssetLoadState {
    phase: LoadPhase,
    attached: NodeId,
    rx: Option<Receiver<LoadMessage>>,
    deadline: Option<f64>,
    timed_out: bool,
}

impl AssetLoadState {
    /// Attach the placeholder and start in [`LoadPhase::Placeholder`].
    pub fn new(scene: &mut dyn SceneGraph) -> Self {
        let attached = scene.attach(Visual::character_placeholder());
        Self {
            phase: LoadPhase::Placeholder,
            attached,
            rx: None,
            deadline: None,
            timed_out: false,
        }
    }

    /// Start consuming a fetch, arming the timeout at `now + timeout`.
    ///
    /// `rx` is the channel returned by [`super::spawn_fetch`]. Calling this
    /// in any phase other than `Placeholder` is ignored: this design has no
    /// retry.
    pub fn begin(&mut self, rx: Receiver<LoadMessage>, now: f64, timeout: f64) {
        if self.phase != LoadPhase::Placeholder {
            warn!("model load already {:?}, begin ignored", self.phase);
            return;
        }
        self.rx = Some(rx);
        self.deadline = Some(now + timeout);
        self.phase = LoadPhase::Loading;
    }

    /// Apply any completed fetch result and check the timeout.
    ///
    /// Runs on the tick thread; the fetch thread only ever touches the
    /// channel, so no locking is needed.
    pub fn poll(&mut self, scene: &mut dyn SceneGraph, now: f64) {
        // Drain everything queued. More than one message should never
        // happen, but a duplicate success must not double-attach.
        let messages: Vec<LoadMessage> = match &self.rx {
            Some(rx) => rx.try_iter().collect(),
            None => Vec::new(),
        };
        for message in messages {
            match message {
                LoadMessage::Loaded(model) => self.resolve_success(scene, model),
                LoadMessage::Failed(err) => self.resolve_failure(err),
            }
        }

        if self.phase == LoadPhase::Loading
            && !self.timed_out
            && self.deadline.is_some_and(|deadline| now >= deadline)
        {
            // Cosmetic only: keep the channel so a late success still lands.
            warn!("model load deadline passed, keeping placeholder for now");
            self.timed_out = true;
        }
    }

    fn resolve_success(&mut self, scene: &mut dyn SceneGraph, model: ModelData) {
        match self.phase {
            LoadPhase::Loaded => {
                warn!("duplicate model load result ignored");
                return;
            }
            LoadPhase::Failed => {
                // The error already resolved the load; nothing to swap.
                warn!("model arrived after load failure, dropped");
                return;
            }
            LoadPhase::Placeholder | LoadPhase::Loading => {}
        }

        info!(
            "model loaded from {} ({} bytes), swapping placeholder",
            model.source, model.size_bytes
        );

        // Single atomic swap of the exclusive visual handle.
        let placeholder = self.attached;
        scene.detach(placeholder);
        scene.dispose(placeholder);
        self.attached = scene.attach(Visual::Model(model));

        self.phase = LoadPhase::Loaded;
        self.deadline = None;
        self.rx = None;
    }

    fn resolve_failure(&mut self, err: LoadError) {
        if self.phase == LoadPhase::Loaded {
            warn!("load error after success ignored: {err}");
            return;
        }
        // Recovered condition: the placeholder simply stays attached.
        warn!("model load failed, keeping placeholder: {err}");
        self.phase = LoadPhase::Failed;
        self.deadline = None;
        self.rx = None;
    }

    /// Handle of the currently attached visual (placeholder or model).
    pub fn attached_node(&self) -> NodeId {
        self.attached
    }

    /// Current phase.
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Whether the timeout warning has fired.
    pub fn timed_out(&self) -> bool {
        self.timed_out
    }

    /// Yaw to add to the character's facing when transforming the visual.
    /// Zero until the real model is attached.
    pub fn visual_yaw_offset(&self) -> f32 {
        match self.phase {
            LoadPhase::Loaded => MODEL_YAW_CORRECTION,
            _ => 0.0,
        }
    }

    /// Uniform scale the renderer should draw the visual at.
    pub fn visual_scale(&self) -> f32 {
        match self.phase {
            LoadPhase::Loaded => MODEL_SCALE_NORMALIZATION,
            _ => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{HeadlessScene, ModelNode};
    use crossbeam_channel::unbounded;

    fn test_model() -> ModelData {
        ModelData {
            source: "assets/models/runner.glb".to_string(),
            size_bytes: 1024,
            nodes: vec![ModelNode {
                name: "runner".to_string(),
                children: Vec::new(),
            }],
        }
    }

    #[test]
    fn test_new_attaches_placeholder() {
        let mut scene = HeadlessScene::new();
        let state = AssetLoadState::new(&mut scene);

        assert_eq!(state.phase(), LoadPhase::Placeholder);
        assert_eq!(scene.node_count(), 1);
        assert!(matches!(
            scene.node(state.attached_node()).unwrap().visual,
            Visual::Placeholder { .. }
        ));
    }

    #[test]
    fn test_begin_only_from_placeholder() {
        let mut scene = HeadlessScene::new();
        let mut state = AssetLoadState::new(&mut scene);

        let (_tx1, rx1) = unbounded();
        state.begin(rx1, 0.0, LOAD_TIMEOUT_SECONDS);
        assert_eq!(state.phase(), LoadPhase::Loading);

        // Second begin is ignored, no retry in this design
        let (_tx2, rx2) = unbounded();
        state.begin(rx2, 1.0, LOAD_TIMEOUT_SECONDS);
        assert_eq!(state.phase(), LoadPhase::Loading);
    }

    #[test]
    fn test_success_swaps_exactly_once() {
        let mut scene = HeadlessScene::new();
        let mut state = AssetLoadState::new(&mut scene);
        let placeholder = state.attached_node();

        let (tx, rx) = unbounded();
        state.begin(rx, 0.0, LOAD_TIMEOUT_SECONDS);
        tx.send(LoadMessage::Loaded(test_model())).unwrap();

        state.poll(&mut scene, 0.1);

        assert_eq!(state.phase(), LoadPhase::Loaded);
        assert_eq!(scene.node_count(), 1);
        assert_eq!(scene.detach_count, 1);
        assert_eq!(scene.dispose_count, 1);
        assert!(scene.is_disposed(placeholder));
        assert!(matches!(
            scene.node(state.attached_node()).unwrap().visual,
            Visual::Model(_)
        ));
    }

    #[test]
    fn test_duplicate_success_ignored() {
        let mut scene = HeadlessScene::new();
        let mut state = AssetLoadState::new(&mut scene);

        let (tx, rx) = unbounded();
        state.begin(rx, 0.0, LOAD_TIMEOUT_SECONDS);
        tx.send(LoadMessage::Loaded(test_model())).unwrap();
        tx.send(LoadMessage::Loaded(test_model())).unwrap();

        state.poll(&mut scene, 0.1);
        state.poll(&mut scene, 0.2);

        // One placeholder swap total, no double attach or dispose
        assert_eq!(scene.attach_count, 2);
        assert_eq!(scene.dispose_count, 1);
        assert_eq!(scene.node_count(), 1);
    }

    #[test]
    fn test_failure_keeps_placeholder() {
        let mut scene = HeadlessScene::new();
        let mut state = AssetLoadState::new(&mut scene);
        let placeholder = state.attached_node();

        let (tx, rx) = unbounded();
        state.begin(rx, 0.0, LOAD_TIMEOUT_SECONDS);
        tx.send(LoadMessage::Failed(LoadError::Format("broken".to_string())))
            .unwrap();

        state.poll(&mut scene, 0.1);

        assert_eq!(state.phase(), LoadPhase::Failed);
        assert_eq!(state.attached_node(), placeholder);
        assert_eq!(scene.node_count(), 1);
        assert_eq!(scene.detach_count, 0);
        // No model visual was ever attached
        assert_eq!(scene.attach_count, 1);
    }

    #[test]
    fn test_timeout_is_cosmetic_late_success_applies() {
        let mut scene = HeadlessScene::new();
        let mut state = AssetLoadState::new(&mut scene);

        let (tx, rx) = unbounded();
        state.begin(rx, 0.0, LOAD_TIMEOUT_SECONDS);

        // Deadline passes with nothing delivered
        state.poll(&mut scene, LOAD_TIMEOUT_SECONDS + 1.0);
        assert!(state.timed_out());
        assert_eq!(state.phase(), LoadPhase::Loading);

        // A late success still swaps the model in
        tx.send(LoadMessage::Loaded(test_model())).unwrap();
        state.poll(&mut scene, LOAD_TIMEOUT_SECONDS + 2.0);
        assert_eq!(state.phase(), LoadPhase::Loaded);
    }

    #[test]
    fn test_visual_adjustments_only_when_loaded() {
        let mut scene = HeadlessScene::new();
        let mut state = AssetLoadState::new(&mut scene);
        assert_eq!(state.visual_yaw_offset(), 0.0);
        assert_eq!(state.visual_scale(), 1.0);

        let (tx, rx) = unbounded();
        state.begin(rx, 0.0, LOAD_TIMEOUT_SECONDS);
        tx.send(LoadMessage::Loaded(test_model())).unwrap();
        state.poll(&mut scene, 0.1);

        assert_eq!(state.visual_yaw_offset(), MODEL_YAW_CORRECTION);
        assert_eq!(state.visual_scale(), MODEL_SCALE_NORMALIZATION);
    }
}
