//! Infrastructure layer for external integrations.
//!
//! This layer implements the traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`storage`] - Key-value persistence (JSON file and in-memory)
//! - [`shortener`] - HTTP client for the shortening service
//! - [`view`] - Terminal and recording views
//! - [`clipboard`] - Clipboard access

pub mod clipboard;
pub mod shortener;
pub mod storage;
pub mod view;
