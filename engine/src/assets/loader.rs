//! Model Loader
//!
//! Background fetching of the character model. The fetch itself is
//! synchronous ([`ModelSource::fetch`]); [`spawn_fetch`] runs it on a worker
//! thread and hands back a channel, so the tick loop never blocks on I/O.
//! Completion is observed by draining the channel on the simulation thread,
//! which keeps all state mutation single-threaded.

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::thread;

use crossbeam_channel::{Receiver, unbounded};
use log::debug;

use crate::scene::{ModelData, ModelNode};

/// GLB container magic: ASCII "glTF" as a little-endian u32.
const GLB_MAGIC: u32 = 0x46546C67;

/// GLB container version this demo understands.
const GLB_VERSION: u32 = 2;

/// Why a model fetch failed.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read
    Io(std::io::Error),
    /// The file was read but is not a model we understand
    Format(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "model read failed: {err}"),
            LoadError::Format(msg) => write!(f, "model format invalid: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

/// Result of a background fetch, delivered over the loader channel.
#[derive(Debug)]
pub enum LoadMessage {
    /// The model loaded successfully
    Loaded(ModelData),
    /// The fetch failed; the placeholder stays
    Failed(LoadError),
}

/// Source of character models.
///
/// The seam for the asset collaborator: production code uses
/// [`FileModelSource`], tests substitute their own.
pub trait ModelSource: Send + 'static {
    /// Fetch and validate the model at `path`.
    fn fetch(&self, path: &Path) -> Result<ModelData, LoadError>;
}

/// Loads GLB model files from disk.
///
/// Validates the 12-byte GLB container header (magic, version, declared
/// length) and builds a single-root node table. Mesh contents stay opaque;
/// the simulation only needs a traversable handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileModelSource;

impl FileModelSource {
    /// Create a file-based model source.
    pub fn new() -> Self {
        Self
    }
}

impl ModelSource for FileModelSource {
    fn fetch(&self, path: &Path) -> Result<ModelData, LoadError> {
        let mut file = fs::File::open(path)?;
        let size_bytes = file.metadata()?.len();

        let mut header = [0u8; 12];
        file.read_exact(&mut header).map_err(|_| {
            LoadError::Format(format!("file too short for a GLB header ({size_bytes} bytes)"))
        })?;

        let magic = u32::from_le_bytes([header[0], header[1], header[2], header[3]]);
        let version = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);
        let declared_len = u32::from_le_bytes([header[8], header[9], header[10], header[11]]);

        if magic != GLB_MAGIC {
            return Err(LoadError::Format(format!(
                "bad magic 0x{magic:08x}, expected glTF container"
            )));
        }
        if version != GLB_VERSION {
            return Err(LoadError::Format(format!(
                "unsupported GLB version {version}, expected {GLB_VERSION}"
            )));
        }
        if u64::from(declared_len) != size_bytes {
            return Err(LoadError::Format(format!(
                "declared length {declared_len} does not match file size {size_bytes}"
            )));
        }

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "model".to_string());

        debug!("validated GLB header for {} ({size_bytes} bytes)", path.display());

        Ok(ModelData {
            source: path.display().to_string(),
            size_bytes,
            nodes: vec![ModelNode {
                name,
                children: Vec::new(),
            }],
        })
    }
}

/// Run a fetch on a background thread.
///
/// Fire-and-forget: the returned receiver yields exactly one [`LoadMessage`]
/// on a later tick. If the receiver is dropped before the fetch finishes,
/// the send fails silently and the thread exits.
pub fn spawn_fetch<S: ModelSource>(source: S, path: PathBuf) -> Receiver<LoadMessage> {
    let (tx, rx) = unbounded();
    thread::spawn(move || {
        let message = match source.fetch(&path) {
            Ok(model) => LoadMessage::Loaded(model),
            Err(err) => LoadMessage::Failed(err),
        };
        let _ = tx.send(message);
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn glb_bytes(magic: u32, version: u32, len: u32, pad_to: usize) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&magic.to_le_bytes());
        bytes.extend_from_slice(&version.to_le_bytes());
        bytes.extend_from_slice(&len.to_le_bytes());
        bytes.resize(pad_to, 0);
        bytes
    }

    fn write_temp(name: &str, bytes: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        path
    }

    #[test]
    fn test_fetch_valid_glb() {
        let path = write_temp("runner_loader_valid.glb", &glb_bytes(GLB_MAGIC, 2, 64, 64));

        let model = FileModelSource::new().fetch(&path).unwrap();
        assert_eq!(model.size_bytes, 64);
        assert_eq!(model.nodes.len(), 1);
        assert_eq!(model.root().unwrap().name, "runner_loader_valid");

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_fetch_missing_file() {
        let path = std::env::temp_dir().join("runner_loader_does_not_exist.glb");
        let err = FileModelSource::new().fetch(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_fetch_bad_magic() {
        let path = write_temp("runner_loader_bad_magic.glb", &glb_bytes(0xDEADBEEF, 2, 64, 64));

        let err = FileModelSource::new().fetch(&path).unwrap_err();
        assert!(matches!(err, LoadError::Format(_)));

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_fetch_length_mismatch() {
        // Declares 64 bytes but the file is 128
        let path = write_temp("runner_loader_bad_len.glb", &glb_bytes(GLB_MAGIC, 2, 64, 128));

        let err = FileModelSource::new().fetch(&path).unwrap_err();
        assert!(matches!(err, LoadError::Format(_)));

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_spawn_fetch_delivers_failure() {
        let path = std::env::temp_dir().join("runner_loader_spawn_missing.glb");
        let rx = spawn_fetch(FileModelSource::new(), path);

        // The worker thread finishes quickly for a missing file
        let message = rx.recv_timeout(std::time::Duration::from_secs(5)).unwrap();
        assert!(matches!(message, LoadMessage::Failed(LoadError::Io(_))));
    }
}
