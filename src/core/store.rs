//! # Durable Key-Value Storage
//!
//! The persistence seam for everything that survives a restart.
//! Values are opaque strings keyed by short identifiers; callers decide
//! the encoding (the progress store uses JSON, the welcome flag a bare
//! `"true"`).
//!
//! `FileStore` keeps one file per key under the data directory and
//! writes atomically (write `.tmp`, then `rename()`) for crash safety.
//! `MemoryStore` backs tests that simulate restarts without touching
//! the filesystem.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use log::{debug, warn};

/// Abstract key-value persistence. Single writer, single reader,
/// accessed only from the UI thread.
pub trait KeyValueStore {
    /// Read the value for `key`. Missing or unreadable values are `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// File-backed store: one file per key inside `dir`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `dir`.
    pub fn open(dir: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        let path = self.path_for(key);
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;
        debug!("Stored {} ({} bytes)", key, value.len());
        Ok(())
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a value, simulating state left by a previous run.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("missing"), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v2"));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.get("userProgress"), None);
        store.set("userProgress", r#"{"read":[]}"#).unwrap();
        assert_eq!(store.get("userProgress").as_deref(), Some(r#"{"read":[]}"#));
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = FileStore::open(dir.path().to_path_buf()).unwrap();
            store.set("hasSeenWelcome", "true").unwrap();
        }
        let store = FileStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.get("hasSeenWelcome").as_deref(), Some("true"));
    }

    #[test]
    fn test_file_store_leaves_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path().to_path_buf()).unwrap();
        store.set("key", "value").unwrap();
        assert!(!dir.path().join("key.tmp").exists());
    }
}
