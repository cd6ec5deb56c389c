//! src/store/file.rs
//!
//! File-backed store: one JSON document per key under the platform
//! config directory (or an explicit override directory).

use std::path::PathBuf;

use tracing::info;

use super::{KvStore, StoreError};

/// Persistent store keeping each key in `<dir>/<key>.json`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at the platform config directory
    /// (e.g. `~/.config/hovercraft` on Linux).
    pub fn open_default() -> Result<Self, StoreError> {
        let base = dirs::config_dir().ok_or(StoreError::NoConfigDir)?;
        Ok(Self::open(base.join("hovercraft")))
    }

    /// Open a store rooted at an explicit directory.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        info!("using store directory {}", dir.display());
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Err(source) = std::fs::create_dir_all(&self.dir) {
            return Err(StoreError::Write {
                key: key.to_string(),
                source,
            });
        }
        std::fs::write(self.path_for(key), value).map_err(|source| StoreError::Write {
            key: key.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_missing_key_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path());
        assert_eq!(store.get("hovercraft-settings"), None);
    }

    #[test]
    fn set_then_get_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(tmp.path());
        store.set("hovercraft-settings", r#"{"speed":"0.5"}"#).unwrap();
        assert_eq!(
            store.get("hovercraft-settings").as_deref(),
            Some(r#"{"speed":"0.5"}"#)
        );
    }

    #[test]
    fn values_survive_reopening() {
        let tmp = tempfile::tempdir().unwrap();
        {
            let mut store = FileStore::open(tmp.path());
            store.set("hovercraft-history", "[]").unwrap();
        }
        let store = FileStore::open(tmp.path());
        assert_eq!(store.get("hovercraft-history").as_deref(), Some("[]"));
    }

    #[test]
    fn set_overwrites_previous_value() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(tmp.path());
        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("two"));
    }
}
