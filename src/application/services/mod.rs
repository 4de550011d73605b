//! Business logic services for the application layer.

pub mod link_store;
pub mod widget;

pub use link_store::{LinkStore, STORAGE_KEY};
pub use widget::{DEFAULT_TIMEOUT, Widget};
