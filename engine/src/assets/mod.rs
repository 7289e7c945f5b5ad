//! Assets Module
//!
//! Asynchronous character model loading. A background thread fetches the
//! model and reports over a channel; [`AssetLoadState`] drains that channel
//! once per tick on the simulation thread and swaps the placeholder visual
//! for the loaded model, falling back to the placeholder on error or timeout.

pub mod loader;
pub mod state;

pub use loader::{FileModelSource, LoadError, LoadMessage, ModelSource, spawn_fetch};
pub use state::{AssetLoadState, LoadPhase};
