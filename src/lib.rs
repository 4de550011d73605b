//! # shortly
//!
//! A URL shortening client that keeps a persisted list of short links.
//!
//! ## Architecture
//!
//! The crate keeps the same layer separation as a service would:
//!
//! - **Domain Layer** ([`domain`]) - The [`ShortenedLink`](domain::entities::ShortenedLink)
//!   entity and the traits at every seam (storage, shortening service, view, clipboard)
//! - **Application Layer** ([`application`]) - The link store and the widget workflow
//! - **Infrastructure Layer** ([`infrastructure`]) - File/memory storage, the HTTP client,
//!   terminal and recording views, clipboard access
//!
//! ## Flow
//!
//! A submit event runs [`Widget::submit`](application::services::Widget::submit): the
//! external service is raced against a timeout, the result is added to the
//! [`LinkStore`](application::services::LinkStore) and rendered. Delete and copy events
//! go straight to the store and the view.
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;

pub use error::{ShortenError, StorageError, WorkflowError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkStore, Widget};
    pub use crate::domain::entities::ShortenedLink;
    pub use crate::domain::gateways::{Clipboard, LinkView, ShortenerApi};
    pub use crate::domain::repositories::KeyValueStore;
    pub use crate::error::{ShortenError, StorageError, WorkflowError};
}
