//! Link entity representing a shortened URL kept in the user's list.

use serde::{Deserialize, Serialize};

/// A shortened URL returned by the shortening service.
///
/// `short_url` identifies the record inside the link store. Field names are
/// serialized in camelCase (`originalUrl`, `shortUrl`), which is the shape
/// stored under the `URLs` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenedLink {
    pub original_url: String,
    pub short_url: String,
}

impl ShortenedLink {
    /// Creates a new ShortenedLink instance.
    pub fn new(original_url: impl Into<String>, short_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            short_url: short_url.into(),
        }
    }
}
