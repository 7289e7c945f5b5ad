//! Scene Module
//!
//! The scene-graph seam between the simulation and whatever renders it. The
//! core only ever attaches, detaches, disposes and transforms nodes through
//! [`SceneGraph`]; [`HeadlessScene`] is the implementation used by the demo
//! binary and the tests.

pub mod graph;
pub mod headless;

pub use graph::{ModelData, ModelNode, NodeId, SceneGraph, Visual};
pub use headless::HeadlessScene;
