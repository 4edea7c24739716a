//! In-memory store implementation for unit testing and local development.

use crate::store::repository::{KeyValueStore, StoreResult};
use parking_lot::RwLock;
use std::collections::HashMap;

/// A [`KeyValueStore`] backed by a process-local hash map.
#[derive(Debug, Default)]
pub struct LocalStore {
    entries: RwLock<HashMap<String, String>>,
}

impl LocalStore {
    pub fn new() -> Self {
        LocalStore::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}
