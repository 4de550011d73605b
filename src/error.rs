//! Error taxonomy for the link store, the shortening client and the widget.
//!
//! Each layer has its own error type. [`WorkflowError`] is the one the UI
//! boundary sees; it maps every failure kind to a display string through
//! [`WorkflowError::user_message`].

use std::time::Duration;

/// Failures of the key-value persistence surface.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize stored data: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failures of a single call to the external shortening service.
#[derive(Debug, thiserror::Error)]
pub enum ShortenError {
    #[error("Request to shortening service failed: {0}")]
    Network(String),

    #[error("Shortening service responded with HTTP {status}")]
    HttpStatus { status: u16, detail: Option<String> },

    #[error("Unexpected response from shortening service: {0}")]
    Parse(String),
}

/// Failures of the clipboard collaborator.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Outcome of a failed widget action (submit, copy, delete, init).
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("A submission is already in flight")]
    Busy,

    #[error("No URL was entered")]
    EmptyUrl,

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP status {status}")]
    HttpStatus { status: u16, detail: Option<String> },

    #[error("Timed out after {elapsed:?}")]
    Timeout { elapsed: Duration },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Short link not found: {0}")]
    LinkNotFound(String),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

impl From<ShortenError> for WorkflowError {
    fn from(err: ShortenError) -> Self {
        match err {
            ShortenError::Network(reason) => Self::Network(reason),
            ShortenError::HttpStatus { status, detail } => Self::HttpStatus { status, detail },
            ShortenError::Parse(reason) => Self::Parse(reason),
        }
    }
}

impl WorkflowError {
    /// Message shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Busy => "A link is already being shortened, please wait.".to_string(),
            Self::EmptyUrl => "Please add a link.".to_string(),
            Self::Network(_) => {
                "Could not reach the shortening service. Check your connection and try again."
                    .to_string()
            }
            Self::HttpStatus { status, detail } if (400..500).contains(status) => match detail {
                Some(detail) => format!("Please enter a valid URL! ({detail})"),
                None => "Please enter a valid URL!".to_string(),
            },
            Self::HttpStatus { status, .. } => {
                format!("The shortening service is unavailable right now (HTTP {status}).")
            }
            Self::Timeout { elapsed } => format!(
                "The shortening service did not answer within {} seconds.",
                elapsed.as_secs()
            ),
            Self::Parse(_) => "The shortening service sent an unexpected response.".to_string(),
            Self::Storage(_) => "The link was shortened but could not be saved.".to_string(),
            Self::LinkNotFound(_) => "That short link is not in your list.".to_string(),
            Self::Clipboard(_) => "Could not copy the link to the clipboard.".to_string(),
        }
    }
}
