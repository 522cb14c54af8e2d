//! Error types for photogrid.
//!
//! This module defines the centralized error type [`PhotoGridError`] and a type
//! alias [`Result`] used throughout the crate. All errors are implemented using
//! the `thiserror` crate for automatic `Error` trait implementation.
//!
//! # Request Failures
//!
//! From the controller's point of view there is only one kind of failure: the
//! request failed. Three variants make up that kind and are grouped by
//! [`PhotoGridError::is_request_failure`]:
//!
//! - [`PhotoGridError::Http`]: transport failure (DNS, connection, TLS, body read)
//! - [`PhotoGridError::Status`]: the service answered with a non-2xx status
//! - [`PhotoGridError::Decode`]: the payload did not match the expected shape

use thiserror::Error;

/// The main error type for photogrid operations.
///
/// # Examples
///
/// ```
/// use photogrid::PhotoGridError;
///
/// let error = PhotoGridError::Status {
///     status: 404,
///     url: "https://api.unsplash.com/photos/missing".to_string(),
/// };
/// assert!(error.is_request_failure());
/// assert!(!PhotoGridError::Config("bad".to_string()).is_request_failure());
/// ```
#[derive(Debug, Error)]
pub enum PhotoGridError {
    /// The HTTP request could not be completed.
    ///
    /// Wraps transport-level errors from `reqwest`: unreachable host, refused
    /// connection, TLS failure, or an interrupted body.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The Photo Service responded with a non-success status code.
    #[error("Request failed with status {status}: {url}")]
    Status {
        /// HTTP status code returned by the service.
        status: u16,
        /// Fully resolved request URL.
        url: String,
    },

    /// The response body could not be decoded into the expected record.
    #[error("Malformed response payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration is invalid or could not be read.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

impl PhotoGridError {
    /// Returns `true` if this error belongs to the "request failed" family.
    ///
    /// Request failures are logged and swallowed by the controller; every
    /// other variant is a startup problem surfaced to the caller.
    #[must_use]
    pub const fn is_request_failure(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. } | Self::Decode(_))
    }
}

/// A specialized `Result` type for photogrid operations.
pub type Result<T> = std::result::Result<T, PhotoGridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_errors_are_request_failures() {
        let err = serde_json::from_str::<Vec<u32>>("{not json").unwrap_err();
        let error = PhotoGridError::from(err);
        assert!(error.is_request_failure());
        assert!(error.to_string().starts_with("Malformed response payload"));
    }

    #[test]
    fn status_error_mentions_code_and_url() {
        let error = PhotoGridError::Status {
            status: 404,
            url: "http://localhost/photos/42".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Request failed with status 404: http://localhost/photos/42"
        );
    }

    #[test]
    fn ambient_errors_are_not_request_failures() {
        let io = PhotoGridError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(!io.is_request_failure());
        assert!(!PhotoGridError::Theme("broken".to_string()).is_request_failure());
    }
}
