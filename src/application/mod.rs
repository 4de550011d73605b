//! Application layer services implementing the widget's behavior.
//!
//! Services consume the domain traits and provide the operations the UI
//! events call into.
//!
//! # Available Services
//!
//! - [`services::link_store::LinkStore`] - Persisted link collection
//! - [`services::widget::Widget`] - Submission workflow, copy and delete actions

pub mod services;
