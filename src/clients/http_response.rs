//! HTTP response types for the Polar API client.
//!
//! This module provides the [`HttpResponse`] type consumed by the
//! response-to-result translator in [`crate::result`].

use std::collections::HashMap;

/// A raw HTTP response from the Polar API.
///
/// Holds the status code, headers, and the unparsed body text. Body
/// parsing is deliberately left to the translator so that a malformed
/// 2xx body can be classified as a deserialization failure instead of
/// being silently swallowed here.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body text.
    pub body: String,
    /// Seconds to wait before retrying (from the `Retry-After` header).
    pub retry_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the `Retry-After` header.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        // A hostile or buggy server can send anything here; only a finite,
        // non-negative duration is usable as a wait.
        let retry_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok())
            .filter(|seconds| seconds.is_finite() && *seconds >= 0.0);

        Self {
            code,
            headers,
            body,
            retry_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the body is empty or whitespace only.
    #[must_use]
    pub fn is_body_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// Useful for debugging and error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in [200, 201, 204, 299] {
            let response = HttpResponse::new(code, HashMap::new(), String::new());
            assert!(response.is_ok(), "expected is_ok() for code {code}");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 404, 422, 429, 500, 503] {
            let response = HttpResponse::new(code, HashMap::new(), String::new());
            assert!(!response.is_ok(), "expected !is_ok() for code {code}");
        }
    }

    #[test]
    fn test_retry_after_parsing() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["2.5".to_string()]);

        let response = HttpResponse::new(429, headers, String::new());
        assert!((response.retry_after.unwrap() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_retry_after_absent_when_header_missing() {
        let response = HttpResponse::new(429, HashMap::new(), String::new());
        assert!(response.retry_after.is_none());
    }

    #[test]
    fn test_retry_after_rejects_unusable_values() {
        for value in ["-1", "-0.5", "inf", "-inf", "NaN", "soon"] {
            let mut headers = HashMap::new();
            headers.insert("retry-after".to_string(), vec![value.to_string()]);

            let response = HttpResponse::new(429, headers, String::new());
            assert!(
                response.retry_after.is_none(),
                "retry-after {value:?} must be discarded"
            );
        }
    }

    #[test]
    fn test_is_body_empty_ignores_whitespace() {
        let response = HttpResponse::new(204, HashMap::new(), "  \n".to_string());
        assert!(response.is_body_empty());

        let response = HttpResponse::new(200, HashMap::new(), "{}".to_string());
        assert!(!response.is_body_empty());
    }

    #[test]
    fn test_request_id_extraction() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["abc-123".to_string()]);

        let response = HttpResponse::new(200, headers, String::new());
        assert_eq!(response.request_id(), Some("abc-123"));
    }
}
