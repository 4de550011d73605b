//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for persistence; implementations live in
//! `crate::infrastructure::storage`. Mock implementations are generated via
//! `mockall` for unit tests.

pub mod key_value_store;

pub use key_value_store::KeyValueStore;

#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
