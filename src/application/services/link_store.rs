//! Persisted, insertion-ordered collection of shortened links.

use crate::domain::entities::ShortenedLink;
use crate::domain::repositories::KeyValueStore;
use crate::error::StorageError;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

/// Key under which the serialized link list is stored.
pub const STORAGE_KEY: &str = "URLs";

/// Service owning the persisted link collection.
///
/// The whole collection lives under [`STORAGE_KEY`] as a JSON array in
/// insertion order. Every mutation rewrites the full array. `short_url` is
/// unique within the collection.
///
/// Mutations hold `write_lock` from the read to the write, so two events
/// sharing one store (a `delete` landing while a `submit` completes) never
/// lose each other's update. Reads do not take the lock.
pub struct LinkStore<S: KeyValueStore> {
    storage: S,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> LinkStore<S> {
    /// Creates a link store backed by `storage`.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the stored links in insertion order.
    ///
    /// Missing or malformed stored content yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] only if the storage itself cannot be read.
    pub fn list(&self) -> Result<Vec<ShortenedLink>, StorageError> {
        let Some(raw) = self.storage.get(STORAGE_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(links) => Ok(links),
            Err(e) => {
                warn!(error = %e, "Stored link list is malformed, treating it as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Looks up a stored link by its short URL.
    pub fn find(&self, short_url: &str) -> Result<Option<ShortenedLink>, StorageError> {
        Ok(self
            .list()?
            .into_iter()
            .find(|link| link.short_url == short_url))
    }

    /// Appends a link to the end of the collection.
    ///
    /// If a record with the same `short_url` already exists it is taken out
    /// first, so the new record becomes the newest one. The displaced record
    /// is returned, as with `HashMap::insert`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the collection cannot be read or written.
    pub fn add(
        &self,
        original_url: &str,
        short_url: &str,
    ) -> Result<Option<ShortenedLink>, StorageError> {
        let _guard = self.lock_writes()?;
        let mut links = self.list()?;

        let previous = links
            .iter()
            .position(|link| link.short_url == short_url)
            .map(|index| links.remove(index));

        links.push(ShortenedLink::new(original_url, short_url));
        self.write(&links)?;

        debug!(
            original_url,
            short_url,
            replaced = previous.is_some(),
            "Link stored"
        );

        Ok(previous)
    }

    /// Removes the link whose short URL matches.
    ///
    /// Returns `Ok(true)` if a link was removed and `Ok(false)` if none
    /// matched. Storage is only rewritten on an actual match, so repeated
    /// calls with the same key are harmless.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the collection cannot be read or written.
    pub fn remove(&self, short_url: &str) -> Result<bool, StorageError> {
        let _guard = self.lock_writes()?;
        let mut links = self.list()?;

        let Some(index) = links.iter().position(|link| link.short_url == short_url) else {
            debug!(short_url, "No stored link to remove");
            return Ok(false);
        };

        links.remove(index);
        self.write(&links)?;

        debug!(short_url, "Link removed");
        Ok(true)
    }

    /// Clears the persisted collection entirely.
    ///
    /// Only [`STORAGE_KEY`] is removed; other keys of the backing storage are
    /// left alone.
    pub fn reset(&self) -> Result<(), StorageError> {
        let _guard = self.lock_writes()?;
        self.storage.remove(STORAGE_KEY)?;
        debug!("Link store reset");
        Ok(())
    }

    fn lock_writes(&self) -> Result<MutexGuard<'_, ()>, StorageError> {
        self.write_lock
            .lock()
            .map_err(|_| StorageError::Unavailable("link store lock poisoned".to_string()))
    }

    fn write(&self, links: &[ShortenedLink]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(links)?;
        self.storage.set(STORAGE_KEY, &raw)
    }
}
