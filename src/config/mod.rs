//! Configuration types for the Polar API client.
//!
//! This module provides the core configuration types used to initialize
//! the client for API communication with Polar.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`PolarConfig`]: The main configuration struct holding all client settings
//! - [`PolarConfigBuilder`]: A builder for constructing [`PolarConfig`] instances
//! - [`AccessToken`]: A validated access token newtype with masked debug output
//! - [`Server`]: The Polar environment (production or sandbox) to target
//!
//! All resilience policy (retry attempts, backoff delay, rate-limit budget)
//! is carried on the configuration and passed explicitly into the HTTP
//! client at construction time. There is no ambient or static policy state.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use polar_api::{PolarConfig, AccessToken, Server};
//!
//! let config = PolarConfig::builder()
//!     .access_token(AccessToken::new("polar_oat_example").unwrap())
//!     .server(Server::Sandbox)
//!     .max_attempts(5)
//!     .initial_retry_delay(Duration::from_millis(250))
//!     .requests_per_minute(120)
//!     .build()
//!     .unwrap();
//!
//! assert!(config.server().is_sandbox());
//! ```

mod newtypes;
mod server;

pub use newtypes::AccessToken;
pub use server::{Server, API_VERSION};

use std::time::Duration;

use crate::error::ConfigError;

/// Default number of attempts per call (one initial try plus two retries).
const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default initial backoff delay between retry attempts.
const DEFAULT_INITIAL_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Default rate-limit budget per rolling one-minute window.
const DEFAULT_REQUESTS_PER_MINUTE: u32 = 100;

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Polar API client.
///
/// This struct holds all configuration needed for client operations:
/// the access token, the target environment, and the resilience policy
/// (retries, backoff, rate limiting, timeout).
///
/// # Thread Safety
///
/// `PolarConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use polar_api::{PolarConfig, AccessToken};
///
/// let config = PolarConfig::builder()
///     .access_token(AccessToken::new("polar_oat_example").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.max_attempts(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct PolarConfig {
    access_token: AccessToken,
    server: Server,
    max_attempts: u32,
    initial_retry_delay: Duration,
    requests_per_minute: u32,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl PolarConfig {
    /// Creates a new builder for constructing a `PolarConfig`.
    #[must_use]
    pub fn builder() -> PolarConfigBuilder {
        PolarConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the target environment.
    #[must_use]
    pub const fn server(&self) -> Server {
        self.server
    }

    /// Returns the maximum number of attempts per call, including the
    /// initial try.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns the initial backoff delay, doubled on each subsequent retry.
    #[must_use]
    pub const fn initial_retry_delay(&self) -> Duration {
        self.initial_retry_delay
    }

    /// Returns the rate-limit budget per rolling one-minute window.
    #[must_use]
    pub const fn requests_per_minute(&self) -> u32 {
        self.requests_per_minute
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify PolarConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PolarConfig>();
};

/// Builder for constructing [`PolarConfig`] instances.
///
/// The only required field is `access_token`. All other fields have
/// sensible defaults.
///
/// # Defaults
///
/// - `server`: [`Server::Production`]
/// - `max_attempts`: 3
/// - `initial_retry_delay`: 500 ms
/// - `requests_per_minute`: 100
/// - `timeout`: 30 s
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct PolarConfigBuilder {
    access_token: Option<AccessToken>,
    server: Option<Server>,
    max_attempts: Option<u32>,
    initial_retry_delay: Option<Duration>,
    requests_per_minute: Option<u32>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl PolarConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the target environment.
    #[must_use]
    pub const fn server(mut self, server: Server) -> Self {
        self.server = Some(server);
        self
    }

    /// Sets the maximum number of attempts per call, including the
    /// initial try. Must be at least 1.
    #[must_use]
    pub const fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Sets the initial backoff delay between retry attempts.
    ///
    /// The delay doubles on each subsequent retry.
    #[must_use]
    pub const fn initial_retry_delay(mut self, delay: Duration) -> Self {
        self.initial_retry_delay = Some(delay);
        self
    }

    /// Sets the rate-limit budget per rolling one-minute window.
    /// Must be at least 1.
    #[must_use]
    pub const fn requests_per_minute(mut self, budget: u32) -> Self {
        self.requests_per_minute = Some(budget);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a user agent prefix prepended to the default User-Agent header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`PolarConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` is
    /// not set, [`ConfigError::InvalidMaxAttempts`] if `max_attempts` is 0,
    /// or [`ConfigError::InvalidRequestsPerMinute`] if the rate-limit
    /// budget is 0.
    pub fn build(self) -> Result<PolarConfig, ConfigError> {
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        let max_attempts = self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS);
        if max_attempts == 0 {
            return Err(ConfigError::InvalidMaxAttempts { value: 0 });
        }

        let requests_per_minute = self
            .requests_per_minute
            .unwrap_or(DEFAULT_REQUESTS_PER_MINUTE);
        if requests_per_minute == 0 {
            return Err(ConfigError::InvalidRequestsPerMinute { value: 0 });
        }

        Ok(PolarConfig {
            access_token,
            server: self.server.unwrap_or_default(),
            max_attempts,
            initial_retry_delay: self
                .initial_retry_delay
                .unwrap_or(DEFAULT_INITIAL_RETRY_DELAY),
            requests_per_minute,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
