//! No-op clipboard for builds without system clipboard support.

use crate::domain::gateways::Clipboard;
use crate::error::ClipboardError;
use tracing::debug;

/// A clipboard that accepts every write and stores nothing.
///
/// Used when the `clipboard` feature is disabled; the view still shows the
/// copied link so it can be selected by hand.
#[derive(Debug)]
pub struct NullClipboard;

impl NullClipboard {
    pub fn new() -> Self {
        debug!("Using NullClipboard (system clipboard disabled)");
        Self
    }
}

impl Default for NullClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for NullClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        debug!(text, "Clipboard write skipped");
        Ok(())
    }
}
