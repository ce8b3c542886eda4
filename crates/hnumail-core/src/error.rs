//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur while talking to the mail backend.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a response (connection refused, timeout, TLS).
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Request failed ({status}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the error body, or the status reason.
        message: String,
    },

    /// The call succeeded but the response carried no body.
    #[error("Server returned an empty response")]
    EmptyBody,

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed URL.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the text shown to the user for this error.
    ///
    /// For backend rejections this is the server's own message; every other
    /// variant falls back to its display form. Never empty.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { status, message } if message.trim().is_empty() => {
                format!("HTTP {status}")
            }
            Self::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
