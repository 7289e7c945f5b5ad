//! Headless Scene
//!
//! A [`SceneGraph`] implementation with no renderer behind it. Stores node
//! state and operation counts so the demo binary can log what would be drawn
//! and tests can assert on attach/detach/dispose sequencing.

use std::collections::HashMap;

use glam::Vec3;
use log::warn;

use super::graph::{NodeId, SceneGraph, Visual};

/// A node currently attached to the headless scene.
#[derive(Debug, Clone)]
pub struct HeadlessNode {
    /// What the node is
    pub visual: Visual,
    /// Last transform pushed via `set_transform`
    pub position: Vec3,
    /// Last yaw pushed via `set_transform`
    pub yaw: f32,
}

/// Renderer-less scene for the demo driver and tests.
#[derive(Debug, Default)]
pub struct HeadlessScene {
    nodes: HashMap<NodeId, HeadlessNode>,
    next_id: u64,
    /// Total attach calls
    pub attach_count: u32,
    /// Total detach calls that removed a live node
    pub detach_count: u32,
    /// Total dispose calls for known (attached or detached) nodes
    pub dispose_count: u32,
    disposed: Vec<NodeId>,
}

impl HeadlessScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes currently attached.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Look up a live node by handle.
    pub fn node(&self, id: NodeId) -> Option<&HeadlessNode> {
        self.nodes.get(&id)
    }

    /// Whether `dispose` has been called for this handle.
    pub fn is_disposed(&self, id: NodeId) -> bool {
        self.disposed.contains(&id)
    }
}

impl SceneGraph for HeadlessScene {
    fn attach(&mut self, visual: Visual) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.attach_count += 1;
        self.nodes.insert(
            id,
            HeadlessNode {
                visual,
                position: Vec3::ZERO,
                yaw: 0.0,
            },
        );
        id
    }

    fn detach(&mut self, id: NodeId) {
        if self.nodes.remove(&id).is_some() {
            self.detach_count += 1;
        } else {
            warn!("detach of unknown node {id:?} ignored");
        }
    }

    fn dispose(&mut self, id: NodeId) {
        // A node is normally detached before disposal, but dispose of a
        // still-attached node removes it too.
        self.nodes.remove(&id);
        if self.disposed.contains(&id) {
            warn!("double dispose of node {id:?} ignored");
            return;
        }
        if id.0 >= self.next_id {
            warn!("dispose of unknown node {id:?} ignored");
            return;
        }
        self.dispose_count += 1;
        self.disposed.push(id);
    }

    fn set_transform(&mut self, id: NodeId, position: Vec3, yaw: f32) {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.position = position;
                node.yaw = yaw;
            }
            None => warn!("set_transform on unknown node {id:?} ignored"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_assigns_unique_ids() {
        let mut scene = HeadlessScene::new();
        let a = scene.attach(Visual::character_placeholder());
        let b = scene.attach(Visual::character_placeholder());

        assert_ne!(a, b);
        assert_eq!(scene.node_count(), 2);
        assert_eq!(scene.attach_count, 2);
    }

    #[test]
    fn test_detach_then_dispose() {
        let mut scene = HeadlessScene::new();
        let id = scene.attach(Visual::character_placeholder());

        scene.detach(id);
        assert_eq!(scene.node_count(), 0);

        scene.dispose(id);
        assert_eq!(scene.dispose_count, 1);
        assert!(scene.is_disposed(id));
    }

    #[test]
    fn test_double_dispose_counted_once() {
        let mut scene = HeadlessScene::new();
        let id = scene.attach(Visual::character_placeholder());

        scene.detach(id);
        scene.dispose(id);
        scene.dispose(id);
        assert_eq!(scene.dispose_count, 1);
    }

    #[test]
    fn test_stale_handle_is_noop() {
        let mut scene = HeadlessScene::new();
        scene.detach(NodeId(99));
        scene.set_transform(NodeId(99), Vec3::ONE, 0.5);
        assert_eq!(scene.detach_count, 0);
    }

    #[test]
    fn test_set_transform() {
        let mut scene = HeadlessScene::new();
        let id = scene.attach(Visual::character_placeholder());

        scene.set_transform(id, Vec3::new(1.0, 2.0, 3.0), 0.7);
        let node = scene.node(id).unwrap();
        assert_eq!(node.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(node.yaw, 0.7);
    }
}
