//! Clipboard collaborator used by the copy action.

use crate::error::ClipboardError;

#[cfg_attr(test, mockall::automock)]
pub trait Clipboard: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
