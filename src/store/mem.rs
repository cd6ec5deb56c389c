//! src/store/mem.rs
//!
//! In-memory store used by tests and by `--ephemeral` runs.

use std::collections::HashMap;

use super::{KvStore, StoreError};

/// Volatile store; contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemStore {
    values: HashMap<String, String>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
