//! Repository trait for the key-value persistence surface.

use crate::error::StorageError;

/// Durable string key-value storage, the equivalent of a browser's
/// origin-scoped local storage.
///
/// Calls are synchronous: every read and write happens within one event's
/// turn, so implementations only need interior mutability, not async I/O.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::FileStorage`] - JSON file on disk
/// - [`crate::infrastructure::storage::MemoryStorage`] - volatile, for tests and ephemeral runs
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `Ok(None)` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write fails (unavailable, quota, I/O).
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
