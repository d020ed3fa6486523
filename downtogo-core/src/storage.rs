//! Durable key/value storage for user state.
//!
//! The membership store only needs string values under string keys, so every
//! backend implements the small [`Storage`] trait. Pick [`NoopStorage`] when
//! nothing should outlive the process, [`MemoryStorage`] for tests and
//! [`FileStorage`] for the CLI.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::{DownToGoError, DownToGoResult};

pub trait Storage {
    /// Read the value stored under `key`, or `None` if there is none or it
    /// could not be read.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> DownToGoResult<()>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> DownToGoResult<()> {
        (**self).set(key, value)
    }
}

impl<S: Storage + ?Sized> Storage for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> DownToGoResult<()> {
        (**self).set(key, value)
    }
}

/// Storage for contexts without a durable medium. Reads find nothing and
/// writes are discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStorage;

impl Storage for NoopStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> DownToGoResult<()> {
        Ok(())
    }
}

/// In-process storage backed by a map.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> DownToGoResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stores each key in its own `<key>.json` file inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> DownToGoResult<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(DownToGoError::Storage(format!("Invalid storage key '{key}'")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key).ok()?;

        if !path.exists() {
            return None;
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not read stored value");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> DownToGoResult<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;

        let temp = self.dir.join(format!("{key}.json.tmp"));

        std::fs::write(&temp, value)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_storage_forgets_everything() {
        let storage = NoopStorage;
        storage.set("userEventsGoing", "[\"a\"]").unwrap();
        assert_eq!(storage.get("userEventsGoing"), None);
    }

    #[test]
    fn memory_storage_overwrites_values() {
        let storage = MemoryStorage::new();
        storage.set("k", "1").unwrap();
        storage.set("k", "2").unwrap();

        assert_eq!(storage.get("k").as_deref(), Some("2"));
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.get("missing"), None);
    }

    #[test]
    fn shared_memory_storage_is_visible_through_rc() {
        let storage = Rc::new(MemoryStorage::new());
        let handle = Rc::clone(&storage);

        handle.set("k", "v").unwrap();
        assert_eq!(storage.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn file_storage_writes_one_file_per_key() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("state"));

        storage.set("userEventsGoing", "[\"e1\"]").unwrap();
        storage.set("userEventsDownToGo", "[]").unwrap();

        assert!(dir.path().join("state/userEventsGoing.json").exists());
        assert!(dir.path().join("state/userEventsDownToGo.json").exists());
        assert!(!dir.path().join("state/userEventsGoing.json.tmp").exists());
        assert_eq!(storage.get("userEventsGoing").as_deref(), Some("[\"e1\"]"));
    }

    #[test]
    fn file_storage_missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert_eq!(storage.get("userEventsGoing"), None);
    }

    #[test]
    fn file_storage_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert!(storage.set("../escape", "x").is_err());
        assert!(storage.set("", "x").is_err());
        assert_eq!(storage.get("../escape"), None);
    }
}
