//! Error types for the tubearchivist client.
//!
//! Only failures the caller cannot recover from become an [`Error`]. HTTP
//! statuses the service is expected to answer with (a rejected page request,
//! a failed deletion) are reported as values, not errors.

use thiserror::Error;

/// The unified error type for tubearchivist operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The service answered, but not with something we can read.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Input validation errors (bad base URL, unusable API key).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// Unexpected responses from the service.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// A list page came back with 200 but its body is not a page document.
    #[error("malformed video page {page}: {reason}")]
    MalformedPage { page: u32, reason: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid base URL.
    #[error("invalid archive URL '{value}': {reason}")]
    ArchiveUrl { value: String, reason: String },

    /// Invalid API key. The value itself is never included.
    #[error("invalid API key: {reason}")]
    ApiKey { reason: String },

    /// Failed to set up the HTTP client.
    #[error("cannot build HTTP client: {message}")]
    Client { message: String },
}
