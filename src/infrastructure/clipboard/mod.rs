//! Clipboard implementations.
//!
//! - [`NullClipboard`] - no-op, always available
//! - `SystemClipboard` - desktop clipboard, behind the `clipboard` feature
//!
//! [`DefaultClipboard`] picks the system clipboard when the feature is on.

mod null_clipboard;
#[cfg(feature = "clipboard")]
mod system_clipboard;

pub use null_clipboard::NullClipboard;
#[cfg(feature = "clipboard")]
pub use system_clipboard::SystemClipboard;

#[cfg(feature = "clipboard")]
pub type DefaultClipboard = SystemClipboard;
#[cfg(not(feature = "clipboard"))]
pub type DefaultClipboard = NullClipboard;
