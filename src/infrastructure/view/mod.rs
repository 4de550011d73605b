//! View adapters implementing [`LinkView`](crate::domain::gateways::LinkView).
//!
//! - [`TerminalView`] - colored terminal output for the `shortly` binary
//! - [`RecordingView`] - records calls, for tests and headless embedding

mod recording_view;
mod terminal_view;

pub use recording_view::{RecordingView, ViewEvent};
pub use terminal_view::TerminalView;
