//! Gateway trait for the external shortening service.

use crate::error::ShortenError;
use async_trait::async_trait;

/// Client for a third-party URL shortening service.
///
/// The contract is fixed by the service: one request per URL, returning the
/// short link on success.
///
/// # Implementations
///
/// - [`crate::infrastructure::shortener::ShrtcoClient`] - HTTP client for shrtco-compatible APIs
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenerApi: Send + Sync {
    /// Requests a short link for `url`.
    ///
    /// # Errors
    ///
    /// - [`ShortenError::Network`] if the request could not be sent or completed
    /// - [`ShortenError::HttpStatus`] on a non-success status code
    /// - [`ShortenError::Parse`] if the body lacks the short link
    async fn shorten(&self, url: &str) -> Result<String, ShortenError>;
}
