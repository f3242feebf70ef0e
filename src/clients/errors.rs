//! Transport-level error types for the HTTP client.
//!
//! These cover failures that happen before a response exists to translate:
//! a request that fails its own validation, a transport error the retry
//! budget could not absorb, or a cooperative cancellation. Once a response
//! arrives, classification is the translator's job instead.

use thiserror::Error;

/// A request that failed verification before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path was empty.
    #[error("Request path cannot be empty")]
    EmptyPath,

    /// The request path must be relative to the API base.
    #[error("Request path must not contain a scheme or host: {path}")]
    AbsolutePath {
        /// The offending path.
        path: String,
    },

    /// GET and DELETE requests cannot carry a body.
    #[error("{method} requests cannot have a body")]
    UnexpectedBody {
        /// The method that was given a body.
        method: &'static str,
    },
}

/// An error from executing an HTTP request against the Polar API.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The transport failed and every retry was exhausted.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The call was cancelled before a response was obtained.
    #[error("Request cancelled")]
    Cancelled,

    /// The request failed verification before being sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

impl HttpError {
    /// Returns `true` if the error was caused by cancellation.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_error_display() {
        assert_eq!(
            InvalidHttpRequestError::EmptyPath.to_string(),
            "Request path cannot be empty"
        );
        assert_eq!(
            InvalidHttpRequestError::UnexpectedBody { method: "GET" }.to_string(),
            "GET requests cannot have a body"
        );
    }

    #[test]
    fn test_http_error_wraps_invalid_request() {
        let error = HttpError::from(InvalidHttpRequestError::EmptyPath);
        assert!(matches!(error, HttpError::InvalidRequest(_)));
        assert!(!error.is_cancelled());
    }

    #[test]
    fn test_cancelled_display() {
        assert_eq!(HttpError::Cancelled.to_string(), "Request cancelled");
        assert!(HttpError::Cancelled.is_cancelled());
    }
}
