//! Best-effort snapshot persistence for the tab store.
//!
//! The store hands a JSON payload to a [`SnapshotStorage`] after each
//! structural mutation and reads one back at startup. Only the ordered tab
//! list is persisted (title, path, closable, isFixed); scroll offsets, cached
//! content and the recently-closed history stay in memory.
//!
//! Storage failures never reach the user. The store logs them and keeps its
//! in-memory state authoritative for the running session.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;

/// Errors raised by storage backends. Always swallowed by the store.
#[derive(Error, Debug)]
pub enum PersistError {
    /// Reading the snapshot file failed.
    #[error("Failed to read snapshot: {path}")]
    Read {
        /// Snapshot file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing the snapshot file failed.
    #[error("Failed to write snapshot: {path}")]
    Write {
        /// Snapshot file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The snapshot could not be encoded as JSON.
    #[error("Failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),

    /// The backend refused the write (quota, disabled storage).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Key/value capability the store persists through.
///
/// `load` returns `Ok(None)` when nothing has been saved yet.
pub trait SnapshotStorage {
    /// Reads the last saved payload.
    fn load(&self) -> Result<Option<String>, PersistError>;

    /// Replaces the saved payload.
    fn save(&mut self, payload: &str) -> Result<(), PersistError>;
}

impl<S: SnapshotStorage + ?Sized> SnapshotStorage for Box<S> {
    fn load(&self) -> Result<Option<String>, PersistError> {
        (**self).load()
    }

    fn save(&mut self, payload: &str) -> Result<(), PersistError> {
        (**self).save(payload)
    }
}

/// Persisted form of the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    /// Tabs in display order.
    #[serde(default)]
    pub tabs: Vec<PersistedTab>,
}

/// Persisted fields of one tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedTab {
    /// Display label.
    pub title: String,
    /// Navigation path.
    pub path: String,
    /// Closability; absent means closable.
    #[serde(default = "default_closable")]
    pub closable: bool,
    /// Pin state; absent means unpinned.
    #[serde(default)]
    pub is_fixed: bool,
}

fn default_closable() -> bool {
    true
}

/// Encodes a snapshot to its JSON payload.
pub fn encode_snapshot(state: &PersistedState) -> Result<String, PersistError> {
    Ok(serde_json::to_string(state)?)
}

/// Decodes a payload, treating anything malformed as an empty state.
pub fn decode_snapshot(payload: &str) -> PersistedState {
    match serde_json::from_str(payload) {
        Ok(state) => state,
        Err(e) => {
            tracing::warn!("Discarding malformed tab snapshot: {}", e);
            PersistedState::default()
        }
    }
}

/// Storage that remembers nothing. Default for stores built without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStorage;

impl SnapshotStorage for NoopStorage {
    fn load(&self) -> Result<Option<String>, PersistError> {
        Ok(None)
    }

    fn save(&mut self, _payload: &str) -> Result<(), PersistError> {
        Ok(())
    }
}

/// In-memory storage. Clones share the same slot, so a test can keep a
/// handle and inspect what the store saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    /// Empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a payload.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(payload.into()))),
        }
    }

    /// The last saved payload, if any.
    pub fn payload(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SnapshotStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, PersistError> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&mut self, payload: &str) -> Result<(), PersistError> {
        *self.slot.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}

/// JSON file storage written with temp-file-then-rename.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage backed by the given file. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStorage for FileStorage {
    fn load(&self) -> Result<Option<String>, PersistError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistError::Read {
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    fn save(&mut self, payload: &str) -> Result<(), PersistError> {
        let write_err = |source| PersistError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, payload).map_err(write_err)?;
        fs::rename(&temp_path, &self.path).map_err(write_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> PersistedState {
        PersistedState {
            tabs: vec![
                PersistedTab {
                    title: "工作台".to_string(),
                    path: "/dashboard".to_string(),
                    closable: false,
                    is_fixed: true,
                },
                PersistedTab {
                    title: "案件列表".to_string(),
                    path: "/case/list".to_string(),
                    closable: true,
                    is_fixed: false,
                },
            ],
        }
    }

    #[test]
    fn encoded_snapshot_uses_camel_case_flags() {
        let json = encode_snapshot(&sample_state()).expect("should encode");
        assert!(json.contains("\"isFixed\":true"));
        assert!(json.contains("\"path\":\"/case/list\""));
    }

    #[test]
    fn decode_fills_missing_flags() {
        let state = decode_snapshot(r#"{"tabs":[{"title":"A","path":"/a"}]}"#);
        assert_eq!(state.tabs.len(), 1);
        assert!(state.tabs[0].closable);
        assert!(!state.tabs[0].is_fixed);
    }

    #[test]
    fn decode_malformed_payload_is_empty() {
        assert_eq!(decode_snapshot("{not json"), PersistedState::default());
        assert_eq!(decode_snapshot(r#"{"tabs": 3}"#), PersistedState::default());
        assert_eq!(decode_snapshot(""), PersistedState::default());
    }

    #[test]
    fn decode_missing_tabs_key_is_empty() {
        assert!(decode_snapshot("{}").tabs.is_empty());
    }

    #[test]
    fn memory_storage_clones_share_slot() {
        let storage = MemoryStorage::new();
        let mut writer = storage.clone();
        writer.save("payload").expect("memory save never fails");
        assert_eq!(storage.payload().as_deref(), Some("payload"));
        assert_eq!(storage.load().expect("load").as_deref(), Some("payload"));
    }

    #[test]
    fn noop_storage_loads_nothing() {
        let mut storage = NoopStorage;
        storage.save("ignored").expect("noop save");
        assert!(storage.load().expect("noop load").is_none());
    }

    #[test]
    fn file_storage_missing_file_loads_none() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let storage = FileStorage::new(dir.path().join("tabs.json"));
        assert!(storage.load().expect("missing file is not an error").is_none());
    }

    #[test]
    fn file_storage_creates_parent_and_replaces_content() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("nested").join("tabs.json");
        let mut storage = FileStorage::new(&path);

        storage.save("first").expect("first save");
        storage.save("second").expect("second save");

        assert_eq!(storage.load().expect("load").as_deref(), Some("second"));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn file_storage_directory_path_is_read_error() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let storage = FileStorage::new(dir.path());
        match storage.load() {
            Err(PersistError::Read { path, .. }) => assert_eq!(path, dir.path()),
            other => panic!("expected Read error, got: {other:?}"),
        }
    }
}
