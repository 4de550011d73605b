//! Volatile in-memory key-value storage.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::repositories::KeyValueStore;
use crate::error::StorageError;
use tracing::debug;

/// A storage implementation that keeps everything in memory.
///
/// Contents are lost when the process exits.
///
/// # Use Cases
///
/// - Unit and integration tests
/// - `--ephemeral` runs that should not touch the disk
#[derive(Debug)]
pub struct MemoryStorage {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates a new empty MemoryStorage instance.
    pub fn new() -> Self {
        debug!("Using MemoryStorage (links are not persisted)");
        Self {
            data: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: T) -> StorageError {
    StorageError::Unavailable("memory storage lock poisoned".to_string())
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut data = self.data.write().map_err(poisoned)?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut data = self.data.write().map_err(poisoned)?;
        data.remove(key);
        Ok(())
    }
}
