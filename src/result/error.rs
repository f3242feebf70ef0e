//! The error model shared by every Polar API operation.
//!
//! This module contains the closed failure taxonomy ([`ErrorKind`]), the
//! structured error value carried by failed results ([`PolarError`]), and
//! the exception-style adapter ([`PolarApiError`]) raised by
//! [`PolarResult::ensure_success`](crate::result::PolarResult::ensure_success).
//!
//! # Error Handling
//!
//! The translator maps HTTP status codes onto [`ErrorKind`] variants:
//!
//! - **400/422**: [`ErrorKind::Validation`] with the API's structured detail
//! - **404**: [`ErrorKind::NotFound`]
//! - **429**: [`ErrorKind::RateLimited`] (also the primary retry trigger)
//! - **5xx**: [`ErrorKind::ServerError`]
//! - unparseable 2xx body: [`ErrorKind::Deserialization`]
//! - transport failure before any response: [`ErrorKind::NetworkError`]
//! - anything unmapped: [`ErrorKind::Unknown`] (never a panic)

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// The closed set of failure kinds a Polar API call can produce.
///
/// Transient kinds (`RateLimited`, `NetworkError`) are retried inside the
/// resilience wrapper and only surface once the retry budget is exhausted.
/// All other kinds propagate immediately as a `Failure` result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The API rejected the request payload (HTTP 400/422).
    Validation,
    /// The requested resource does not exist (HTTP 404).
    NotFound,
    /// The rate-limit budget was exceeded (HTTP 429).
    RateLimited,
    /// The API failed internally (HTTP 5xx).
    ServerError,
    /// The request never produced a response (connection refused, timeout).
    NetworkError,
    /// A 2xx response body could not be deserialized into the target type.
    Deserialization,
    /// A status code outside the mapped taxonomy, or a cancelled call.
    Unknown,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Validation => "validation",
            Self::NotFound => "not found",
            Self::RateLimited => "rate limited",
            Self::ServerError => "server error",
            Self::NetworkError => "network error",
            Self::Deserialization => "deserialization",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// A structured error value describing a failed Polar API call.
///
/// Constructed once at translation time and immutable thereafter. The
/// `status_code` is 0 for failures that never received an HTTP response
/// (network errors, cancellation).
///
/// # Example
///
/// ```rust
/// use polar_api::result::{ErrorKind, PolarError};
///
/// let error = PolarError::new(ErrorKind::NotFound, 404, "Product not found");
/// assert_eq!(error.kind, ErrorKind::NotFound);
/// assert_eq!(error.status_code, 404);
/// assert!(error.detail.is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PolarError {
    /// The failure classification.
    pub kind: ErrorKind,
    /// The HTTP status code, or 0 when no response was received.
    pub status_code: u16,
    /// A human-readable description of the failure.
    pub message: String,
    /// The API's structured error payload, when one was returned
    /// (e.g., the `detail` body of a 422 validation error).
    pub detail: Option<Value>,
}

impl PolarError {
    /// Creates an error with no detail payload.
    #[must_use]
    pub fn new(kind: ErrorKind, status_code: u16, message: impl Into<String>) -> Self {
        Self {
            kind,
            status_code,
            message: message.into(),
            detail: None,
        }
    }

    /// Creates an error carrying the API's structured detail payload.
    #[must_use]
    pub fn with_detail(
        kind: ErrorKind,
        status_code: u16,
        message: impl Into<String>,
        detail: Value,
    ) -> Self {
        Self {
            kind,
            status_code,
            message: message.into(),
            detail: Some(detail),
        }
    }

    /// Creates a `NetworkError` from a transport-level failure.
    ///
    /// Used by callers that catch a connection error before any response
    /// reaches the translator.
    #[must_use]
    pub fn network(source: &reqwest::Error) -> Self {
        Self::new(
            ErrorKind::NetworkError,
            0,
            format!("Network error: {source}"),
        )
    }

    /// Returns `true` if this failure is transient and worth retrying.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self.kind, ErrorKind::RateLimited | ErrorKind::NetworkError)
    }
}

impl fmt::Display for PolarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status_code == 0 {
            write!(f, "{} error: {}", self.kind, self.message)
        } else {
            write!(
                f,
                "{} error (status {}): {}",
                self.kind, self.status_code, self.message
            )
        }
    }
}

/// Exception-style error raised by
/// [`PolarResult::ensure_success`](crate::result::PolarResult::ensure_success).
///
/// This adapter exists for legacy call sites that prefer `?`-based control
/// flow over branching on `is_success`/`is_failure`. It carries the full
/// [`PolarError`] that the result held.
///
/// # Example
///
/// ```rust
/// use polar_api::result::{ErrorKind, PolarError, PolarResult};
///
/// let result: PolarResult<String> =
///     PolarResult::failure(PolarError::new(ErrorKind::NotFound, 404, "missing"));
///
/// let err = result.ensure_success().unwrap_err();
/// assert_eq!(err.status_code(), 404);
/// assert_eq!(err.error().kind, ErrorKind::NotFound);
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{0}")]
pub struct PolarApiError(PolarError);

impl PolarApiError {
    /// Returns the underlying structured error.
    #[must_use]
    pub const fn error(&self) -> &PolarError {
        &self.0
    }

    /// Returns the HTTP status code carried by the error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.0.status_code
    }

    /// Returns the failure classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.0.kind
    }

    /// Consumes the adapter and returns the underlying error.
    #[must_use]
    pub fn into_error(self) -> PolarError {
        self.0
    }
}

impl From<PolarError> for PolarApiError {
    fn from(error: PolarError) -> Self {
        Self(error)
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PolarError>();
    assert_send_sync::<PolarApiError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_display_includes_kind_and_status() {
        let error = PolarError::new(ErrorKind::NotFound, 404, "Product not found");
        let message = error.to_string();

        assert!(message.contains("not found"));
        assert!(message.contains("404"));
        assert!(message.contains("Product not found"));
    }

    #[test]
    fn test_network_error_display_omits_status() {
        let error = PolarError::new(ErrorKind::NetworkError, 0, "connection refused");
        let message = error.to_string();

        assert!(!message.contains('0'));
        assert!(message.contains("connection refused"));
    }

    #[test]
    fn test_with_detail_preserves_payload() {
        let error = PolarError::with_detail(
            ErrorKind::Validation,
            422,
            "validation failed",
            json!({"detail": "name required"}),
        );

        assert_eq!(error.detail, Some(json!({"detail": "name required"})));
    }

    #[test]
    fn test_transient_kinds() {
        let rate_limited = PolarError::new(ErrorKind::RateLimited, 429, "slow down");
        let network = PolarError::new(ErrorKind::NetworkError, 0, "refused");
        let not_found = PolarError::new(ErrorKind::NotFound, 404, "gone");

        assert!(rate_limited.is_transient());
        assert!(network.is_transient());
        assert!(!not_found.is_transient());
    }

    #[test]
    fn test_errors_are_equal_when_constructed_identically() {
        let first = PolarError::new(ErrorKind::ServerError, 503, "unavailable");
        let second = PolarError::new(ErrorKind::ServerError, 503, "unavailable");
        assert_eq!(first, second);
    }

    #[test]
    fn test_api_error_carries_status_and_message() {
        let error = PolarError::new(ErrorKind::Validation, 422, "name required");
        let api_error = PolarApiError::from(error.clone());

        assert_eq!(api_error.status_code(), 422);
        assert_eq!(api_error.kind(), ErrorKind::Validation);
        assert!(api_error.to_string().contains("name required"));
        assert_eq!(api_error.into_error(), error);
    }

    #[test]
    fn test_api_error_implements_std_error() {
        let api_error =
            PolarApiError::from(PolarError::new(ErrorKind::Unknown, 418, "teapot"));
        let _: &dyn std::error::Error = &api_error;
    }
}
