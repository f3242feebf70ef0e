//! Polar API server environment definitions.
//!
//! This module provides the [`Server`] enum for selecting which Polar
//! environment the client talks to.

use std::fmt;
use std::str::FromStr;

/// The Polar API version segment included in every request path.
pub const API_VERSION: &str = "v1";

/// The Polar API environment to target.
///
/// Polar runs two environments: production and a sandbox for testing with
/// fake payment data. Both serve the same versioned API under `/v1`.
///
/// # Example
///
/// ```rust
/// use polar_api::Server;
///
/// assert_eq!(Server::Production.base_url(), "https://api.polar.sh");
/// assert_eq!(Server::Sandbox.base_url(), "https://sandbox-api.polar.sh");
///
/// // Parse from string (e.g., an environment variable)
/// let server: Server = "sandbox".parse().unwrap();
/// assert_eq!(server, Server::Sandbox);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Server {
    /// The production environment (`api.polar.sh`).
    #[default]
    Production,
    /// The sandbox environment (`sandbox-api.polar.sh`) for testing.
    Sandbox,
}

impl Server {
    /// Returns the base URL for this environment, without the version path.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Production => "https://api.polar.sh",
            Self::Sandbox => "https://sandbox-api.polar.sh",
        }
    }

    /// Returns `true` if this is the sandbox environment.
    #[must_use]
    pub const fn is_sandbox(self) -> bool {
        matches!(self, Self::Sandbox)
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Sandbox => write!(f, "sandbox"),
        }
    }
}

impl FromStr for Server {
    type Err = crate::error::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "sandbox" => Ok(Self::Sandbox),
            other => Err(crate::error::ConfigError::InvalidServer {
                name: other.to_string(),
            }),
        }
    }
}
