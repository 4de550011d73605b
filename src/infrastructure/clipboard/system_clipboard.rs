//! System clipboard backed by `arboard`.

use crate::domain::gateways::Clipboard;
use crate::error::ClipboardError;
use tracing::debug;

/// Writes to the desktop clipboard.
///
/// A fresh `arboard::Clipboard` handle is opened per write, since the handle
/// is not `Sync`.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        debug!(text, "Copied to system clipboard");
        Ok(())
    }
}
