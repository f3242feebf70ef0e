//! HTTP client infrastructure for the Polar API.
//!
//! This module contains the transport layer every operation goes through:
//!
//! - [`HttpClient`]: the resilient, rate-limited client
//! - [`HttpRequest`] / [`HttpMethod`]: the request values it executes
//! - [`HttpResponse`]: the raw response handed to the translator
//! - [`RateLimiter`]: the rolling-window request budget
//! - [`CancelToken`]: cooperative cancellation for in-flight calls
//! - [`HttpError`]: transport-level failures

mod cancel;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod rate_limit;

pub use cancel::CancelToken;
pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::HttpClient;
pub use http_request::{HttpMethod, HttpRequest};
pub use http_response::HttpResponse;
pub use rate_limit::RateLimiter;
