//! # polar-api
//!
//! An async Rust client library for the [Polar](https://polar.sh) payments
//! API, built around an explicit result model and a resilient transport.
//!
//! ## Overview
//!
//! Every operation resolves to a [`PolarResult`]: success carries the typed
//! payload, failure carries a structured [`PolarError`] with a closed
//! [`ErrorKind`] taxonomy. Nothing panics on API failure, and callers that
//! prefer `?`-style propagation convert at the boundary with
//! [`PolarResult::ensure_success`].
//!
//! The transport layer handles the concerns every call shares:
//!
//! - **Authentication**: bearer token on every request
//! - **Environments**: production and sandbox servers, versioned paths
//! - **Retries**: exponential backoff on network errors and HTTP 429 only
//! - **Rate limiting**: a client-side rolling one-minute budget that waits
//!   for a slot instead of failing
//! - **Cancellation**: a cooperative [`CancelToken`] honored at every wait
//!   point
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use polar_api::clients::{CancelToken, HttpClient, HttpMethod, HttpRequest};
//! use polar_api::{AccessToken, PolarConfig, Server};
//! use serde_json::Value;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PolarConfig::builder()
//!     .access_token(AccessToken::new("polar_oat_example")?)
//!     .server(Server::Sandbox)
//!     .build()?;
//!
//! let client = HttpClient::new(&config)?;
//! let cancel = CancelToken::new();
//!
//! let request = HttpRequest::new(HttpMethod::Get, "products")
//!     .with_query("organization_id", "org_1");
//!
//! let products = client.send::<Value>(&request, &cancel).await.ensure_success()?;
//! println!("{products}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Failed API calls never raise: they return `Failure` results classified
//! by [`ErrorKind`]. Transient failures (network errors, rate limiting)
//! are retried inside the client and only surface once the retry budget is
//! exhausted. See the [`result`] module for the full status mapping.

#![doc(html_root_url = "https://docs.rs/polar-api/0.1.0")]

pub mod clients;
pub mod config;
pub mod error;
pub mod result;

pub use clients::{CancelToken, HttpClient};
pub use config::{AccessToken, PolarConfig, PolarConfigBuilder, Server};
pub use error::ConfigError;
pub use result::{ErrorKind, Page, Pagination, PolarApiError, PolarError, PolarResult};
