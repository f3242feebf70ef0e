//! Error types for the Polar API client.
//!
//! This module contains error types used throughout the crate for
//! configuration and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use polar_api::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Polar access token.")]
    EmptyAccessToken,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The retry attempt budget is invalid.
    #[error("Invalid max_attempts value {value}. At least one attempt is required.")]
    InvalidMaxAttempts {
        /// The invalid attempt count that was provided.
        value: u32,
    },

    /// The rate-limit budget is invalid.
    #[error("Invalid requests_per_minute value {value}. The rate-limit budget must be at least 1.")]
    InvalidRequestsPerMinute {
        /// The invalid budget that was provided.
        value: u32,
    },

    /// The server environment name is not recognized.
    #[error("Invalid server environment '{name}'. Expected 'production' or 'sandbox'.")]
    InvalidServer {
        /// The unrecognized environment name that was provided.
        name: String,
    },
}
