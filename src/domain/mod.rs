//! Domain layer containing the entity and the traits at every seam.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Persistence trait definitions
//! - [`gateways`] - External service, view and clipboard trait definitions
//!
//! The domain layer has no dependencies on infrastructure. Business logic
//! lives in [`crate::application::services`].

pub mod entities;
pub mod gateways;
pub mod repositories;
