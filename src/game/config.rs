//! Runner Configuration
//!
//! Central configuration for the demo, loadable from a JSON file. `Default`
//! matches the built-in constants, and every field can be overridden
//! individually. A missing config file is not an error from the simulation's
//! point of view; the binary decides how loudly to report it.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::assets::state::LOAD_TIMEOUT_SECONDS;
use crate::camera::ChaseCameraConfig;
use crate::player::MotionConfig;

/// Default location of the character model asset.
pub const DEFAULT_MODEL_PATH: &str = "assets/models/runner.glb";

/// Why a config file could not be used.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read
    Io(std::io::Error),
    /// The file is not valid JSON for [`RunnerConfig`]
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config read failed: {err}"),
            ConfigError::Parse(err) => write!(f, "config parse failed: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Complete demo configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Character motion parameters
    pub motion: MotionConfig,
    /// Chase camera parameters
    pub camera: ChaseCameraConfig,
    /// Path to the character model file
    pub model_path: PathBuf,
    /// Seconds before the load timeout warning fires
    pub load_timeout_seconds: f64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            motion: MotionConfig::default(),
            camera: ChaseCameraConfig::default(),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            load_timeout_seconds: LOAD_TIMEOUT_SECONDS,
        }
    }
}

impl RunnerConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&text).map_err(ConfigError::Parse)
    }

    /// Load from `path` when given, falling back to defaults when no path is
    /// given or the file is missing. A malformed file is still an error: a
    /// config the operator wrote but we cannot honor should not be silently
    /// replaced.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            None => Ok(Self::default()),
            Some(path) if !path.exists() => {
                warn!("config file {} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Some(path) => Self::load(path),
        }
    }
}
