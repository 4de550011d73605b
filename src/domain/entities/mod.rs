//! Core domain entities.
//!
//! The widget has a single entity: [`ShortenedLink`], the pairing of a
//! user-submitted URL with the short URL the service returned for it.

pub mod link;

pub use link::ShortenedLink;
