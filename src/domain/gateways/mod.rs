//! Collaborator traits the widget depends on but does not implement.
//!
//! - [`ShortenerApi`] - the external shortening service
//! - [`LinkView`] - rendering of links, errors and the loading indicator
//! - [`Clipboard`] - destination of the copy action

pub mod clipboard;
pub mod link_view;
pub mod shortener_api;

pub use clipboard::Clipboard;
pub use link_view::LinkView;
pub use shortener_api::ShortenerApi;

#[cfg(test)]
pub use clipboard::MockClipboard;
#[cfg(test)]
pub use link_view::MockLinkView;
#[cfg(test)]
pub use shortener_api::MockShortenerApi;
