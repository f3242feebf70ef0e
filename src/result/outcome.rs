//! The success/failure container returned by every Polar API operation.
//!
//! [`PolarResult<T>`] is a tagged union: exactly one of a success value or a
//! [`PolarError`] is populated, and the state is fixed at construction. The
//! translator is the only production code path that constructs results, so a
//! raw value can never masquerade as a translated success.
//!
//! Two consumption styles coexist:
//!
//! - Branch on [`is_success`](PolarResult::is_success) /
//!   [`is_failure`](PolarResult::is_failure) and take the value or error out.
//! - Call [`ensure_success`](PolarResult::ensure_success) to convert a
//!   failure into a [`PolarApiError`] for `?`-based call sites.
//!
//! # Example
//!
//! ```rust
//! use polar_api::result::{ErrorKind, PolarError, PolarResult};
//!
//! let ok: PolarResult<u32> = PolarResult::success(7);
//! assert!(ok.is_success());
//! assert_eq!(ok.map(|n| n * 2).ok(), Some(14));
//!
//! let failed: PolarResult<u32> =
//!     PolarResult::failure(PolarError::new(ErrorKind::NotFound, 404, "missing"));
//! assert!(failed.is_failure());
//! assert!(failed.ensure_success().is_err());
//! ```

use super::error::{PolarApiError, PolarError};

/// The outcome of a Polar API call: a value or a structured error.
///
/// Void operations (delete, revoke, etc.) use `PolarResult<()>`.
///
/// The container is terminal: once constructed, a result never changes
/// state. It is consumed once by the caller and discarded.
#[derive(Clone, Debug, PartialEq)]
pub enum PolarResult<T> {
    /// The call succeeded and produced a value.
    Success(T),
    /// The call failed with a classified error.
    Failure(PolarError),
}

impl<T> PolarResult<T> {
    /// Wraps a value produced by a successful call.
    #[must_use]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps a classified failure.
    #[must_use]
    pub const fn failure(error: PolarError) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` if the call succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the call failed.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns a reference to the success value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the carried error, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&PolarError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Consumes the result and returns the success value, if any.
    #[must_use]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consumes the result and returns the carried error, if any.
    #[must_use]
    pub fn err(self) -> Option<PolarError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Transforms the success value, preserving a failure untouched.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> PolarResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => PolarResult::Success(f(value)),
            Self::Failure(error) => PolarResult::Failure(error),
        }
    }

    /// Converts the result into exception-style control flow.
    ///
    /// Returns the success value, or a [`PolarApiError`] carrying the
    /// failure's status code and message. This is the adapter for call
    /// sites that prefer `?` over branching.
    ///
    /// # Errors
    ///
    /// Returns [`PolarApiError`] when the result is a `Failure`.
    pub fn ensure_success(self) -> Result<T, PolarApiError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(PolarApiError::from(error)),
        }
    }
}

// Verify PolarResult is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PolarResult<String>>();
    assert_send_sync::<PolarResult<()>>();
};
