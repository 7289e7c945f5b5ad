//! Scene Graph Interface
//!
//! Minimal node-based scene abstraction. The renderer owns the actual GPU
//! resources; the simulation only holds [`NodeId`] handles and describes what
//! a node is via [`Visual`].

use glam::Vec3;

/// Opaque handle to a node attached to a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

/// A node within a loaded model's hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelNode {
    /// Node name from the source file, or a synthesized one
    pub name: String,
    /// Indices of child nodes in [`ModelData::nodes`]
    pub children: Vec<usize>,
}

/// A loaded character model: where it came from and its node hierarchy.
///
/// Mesh and material data stay with the renderer; the simulation only needs a
/// traversable handle to swap in for the placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelData {
    /// Path or identifier the model was fetched from
    pub source: String,
    /// Size of the source file in bytes
    pub size_bytes: u64,
    /// Flat node table; index 0 is the root
    pub nodes: Vec<ModelNode>,
}

impl ModelData {
    /// Root node of the hierarchy, if the model has any nodes.
    pub fn root(&self) -> Option<&ModelNode> {
        self.nodes.first()
    }
}

/// What a scene node visually is. Exactly one of these is attached per
/// character at any time: the placeholder until (and unless) the real model
/// finishes loading.
#[derive(Debug, Clone, PartialEq)]
pub enum Visual {
    /// Simple box stand-in shown while the model loads (and kept on failure)
    Placeholder {
        /// Half extents of the box in meters
        half_extents: Vec3,
    },
    /// The loaded character model
    Model(ModelData),
}

impl Visual {
    /// Placeholder box matching the character's collision size:
    /// 1 m wide, 2 m tall, 1 m deep.
    pub fn character_placeholder() -> Self {
        Visual::Placeholder {
            half_extents: Vec3::new(0.5, 1.0, 0.5),
        }
    }
}

/// Scene-graph operations the simulation drives.
///
/// Implementations must tolerate stale [`NodeId`]s (detach/dispose of an
/// unknown node is a no-op), mirroring how unknown input keys are ignored.
pub trait SceneGraph {
    /// Add a visual to the scene and return its handle.
    fn attach(&mut self, visual: Visual) -> NodeId;

    /// Remove a node from the scene without releasing its resources.
    fn detach(&mut self, id: NodeId);

    /// Release a node's resources. The handle is invalid afterwards.
    fn dispose(&mut self, id: NodeId);

    /// Set a node's world transform: position plus yaw about the vertical
    /// axis (the only rotation this demo uses).
    fn set_transform(&mut self, id: NodeId, position: Vec3, yaw: f32);
}
