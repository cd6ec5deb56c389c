//! src/store.rs
//!
//! Key-value persistence behind a trait, so the controller never touches
//! host storage directly.

pub mod file;
pub mod mem;

pub use file::FileStore;
pub use mem::MemStore;

/// Storage failures. Reads never fail (absence is `None`); only writes do.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not determine a config directory for the store")]
    NoConfigDir,
    #[error("failed to write key {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// Synchronous string key-value storage.
pub trait KvStore {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
