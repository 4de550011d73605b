//! Persistence surface implementations.
//!
//! Provides two [`KeyValueStore`](crate::domain::repositories::KeyValueStore)
//! implementations:
//! - [`FileStorage`] - JSON file on disk, survives restarts
//! - [`MemoryStorage`] - volatile, for tests and ephemeral runs

mod file_storage;
mod memory_storage;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
