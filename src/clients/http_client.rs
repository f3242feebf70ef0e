//! The resilient HTTP client for the Polar API.
//!
//! [`HttpClient`] owns the transport concerns every operation shares:
//! bearer authentication, the versioned base URI, the client-side rate
//! limiter, and the retry loop. Callers build an [`HttpRequest`], execute
//! it, and hand the raw [`HttpResponse`] to the translator, or use the
//! [`send`](HttpClient::send) conveniences that do both.
//!
//! # Retry policy
//!
//! Only transient failures are retried: transport errors that never
//! produced a response, and HTTP 429. A 5xx is returned on the first
//! attempt: the server processed the request, and blind replay of a
//! non-idempotent call is worse than surfacing the failure. Backoff
//! doubles from the configured initial delay; a 429 carrying a
//! `Retry-After` header waits that long instead. When the budget is
//! exhausted the last 429 response is returned as-is so the translator
//! can classify it.

use std::collections::HashMap;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::{PolarConfig, API_VERSION};
use crate::result::{
    translate, translate_nullable, translate_void, ErrorKind, PolarError, PolarResult,
};

use super::cancel::CancelToken;
use super::errors::HttpError;
use super::http_request::HttpRequest;
use super::http_response::HttpResponse;
use super::rate_limit::RateLimiter;

/// A resilient, rate-limited HTTP client for the Polar API.
///
/// Construct one per access token and share it: the rate limiter and the
/// underlying connection pool live on the client, so clones of a single
/// `reqwest` client behind an `Arc`-wrapped `HttpClient` all draw from
/// the same request budget.
///
/// # Example
///
/// ```rust,no_run
/// use polar_api::clients::{CancelToken, HttpClient, HttpMethod, HttpRequest};
/// use polar_api::{AccessToken, PolarConfig};
/// use serde_json::Value;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let config = PolarConfig::builder()
///     .access_token(AccessToken::new("polar_oat_example")?)
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::new(HttpMethod::Get, "products");
/// let result = client.send::<Value>(&request, &CancelToken::new()).await;
/// println!("{result:?}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    access_token: String,
    max_attempts: u32,
    initial_retry_delay: Duration,
    rate_limiter: RateLimiter,
}

impl HttpClient {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying transport cannot
    /// be constructed (e.g. an invalid user agent).
    pub fn new(config: &PolarConfig) -> Result<Self, HttpError> {
        let default_agent = format!(
            "{}/{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        );
        let user_agent = match config.user_agent_prefix() {
            Some(prefix) => format!("{prefix} {default_agent}"),
            None => default_agent,
        };

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_uri: format!("{}/{}", config.server().base_url(), API_VERSION),
            access_token: config.access_token().as_ref().to_string(),
            max_attempts: config.max_attempts(),
            initial_retry_delay: config.initial_retry_delay(),
            rate_limiter: RateLimiter::new(config.requests_per_minute()),
        })
    }

    /// Overrides the base URI, replacing the configured server and
    /// version path. Intended for tests running against a local server.
    #[must_use]
    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = base_uri.into();
        self
    }

    /// Returns the base URI requests are resolved against.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Executes a request with rate limiting and retries, returning the
    /// raw response.
    ///
    /// Each attempt, including each retry, acquires a rate-limit slot
    /// first. Cancellation is honored while waiting for a slot, while a
    /// request is in flight, and between attempts.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the request fails
    /// verification, [`HttpError::Cancelled`] if the token fires first,
    /// or [`HttpError::Network`] if the transport fails on the final
    /// attempt.
    pub async fn execute(
        &self,
        request: &HttpRequest,
        cancel: &CancelToken,
    ) -> Result<HttpResponse, HttpError> {
        request.verify()?;
        let url = format!("{}/{}", self.base_uri, request.normalized_path());

        let mut delay = self.initial_retry_delay;
        let mut attempt = 1;

        loop {
            self.rate_limiter.acquire(cancel).await?;

            debug!(
                method = request.method.as_str(),
                path = request.normalized_path(),
                attempt,
                "dispatching request"
            );

            let outcome = tokio::select! {
                outcome = self.dispatch(request, &url) => outcome,
                () = cancel.cancelled() => return Err(HttpError::Cancelled),
            };

            match outcome {
                Ok(response) if response.code == 429 && attempt < self.max_attempts => {
                    // An unusable Retry-After value falls back to our own
                    // backoff delay instead of failing the call.
                    let wait = response
                        .retry_after
                        .and_then(|seconds| Duration::try_from_secs_f64(seconds).ok())
                        .unwrap_or(delay);
                    warn!(
                        attempt,
                        wait_ms = wait.as_millis() as u64,
                        request_id = response.request_id(),
                        "rate limited by the API, backing off"
                    );
                    self.backoff(wait, cancel).await?;
                }
                Ok(response) => return Ok(response),
                Err(source) => {
                    if attempt >= self.max_attempts {
                        return Err(HttpError::Network(source));
                    }
                    warn!(
                        attempt,
                        error = %source,
                        wait_ms = delay.as_millis() as u64,
                        "network error, backing off"
                    );
                    self.backoff(delay, cancel).await?;
                }
            }

            delay = delay.saturating_mul(2);
            attempt += 1;
        }
    }

    /// Executes a request and translates the outcome into a typed result.
    ///
    /// Transport failures fold into the result model: exhausted network
    /// retries become a [`ErrorKind::NetworkError`] failure, cancellation
    /// and invalid requests become failures rather than panics.
    pub async fn send<T: DeserializeOwned>(
        &self,
        request: &HttpRequest,
        cancel: &CancelToken,
    ) -> PolarResult<T> {
        match self.execute(request, cancel).await {
            Ok(response) => translate(&response),
            Err(error) => PolarResult::failure(transport_failure(&error)),
        }
    }

    /// Like [`send`](Self::send), but maps 404 and empty bodies to
    /// `Success(None)`. For singleton get-by-id lookups.
    pub async fn send_nullable<T: DeserializeOwned>(
        &self,
        request: &HttpRequest,
        cancel: &CancelToken,
    ) -> PolarResult<Option<T>> {
        match self.execute(request, cancel).await {
            Ok(response) => translate_nullable(&response),
            Err(error) => PolarResult::failure(transport_failure(&error)),
        }
    }

    /// Like [`send`](Self::send), but discards any response body. For
    /// side-effect-only operations.
    pub async fn send_void(
        &self,
        request: &HttpRequest,
        cancel: &CancelToken,
    ) -> PolarResult<()> {
        match self.execute(request, cancel).await {
            Ok(response) => translate_void(&response),
            Err(error) => PolarResult::failure(transport_failure(&error)),
        }
    }

    /// Sends one request attempt and collects the full response.
    async fn dispatch(
        &self,
        request: &HttpRequest,
        url: &str,
    ) -> Result<HttpResponse, reqwest::Error> {
        let mut builder = self
            .client
            .request(request.method.into(), url)
            .bearer_auth(&self.access_token);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;

        let code = response.status().as_u16();
        let mut headers: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(text) = value.to_str() {
                headers
                    .entry(name.as_str().to_string())
                    .or_default()
                    .push(text.to_string());
            }
        }
        let body = response.text().await?;

        Ok(HttpResponse::new(code, headers, body))
    }

    /// Sleeps for the backoff delay, aborting early on cancellation.
    async fn backoff(&self, delay: Duration, cancel: &CancelToken) -> Result<(), HttpError> {
        tokio::select! {
            () = tokio::time::sleep(delay) => Ok(()),
            () = cancel.cancelled() => Err(HttpError::Cancelled),
        }
    }
}

/// Folds a transport-level error into the result model's error value.
fn transport_failure(error: &HttpError) -> PolarError {
    match error {
        HttpError::Network(source) => PolarError::network(source),
        HttpError::Cancelled => {
            PolarError::new(ErrorKind::Unknown, 0, "Request cancelled before completion")
        }
        HttpError::InvalidRequest(source) => {
            PolarError::new(ErrorKind::Validation, 0, source.to_string())
        }
    }
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};
