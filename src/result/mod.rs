//! The result model for Polar API operations.
//!
//! Every operation in this crate resolves to a [`PolarResult`]: an explicit
//! success-or-failure value that carries either the typed payload or a
//! structured [`PolarError`]. Callers that prefer `?`-style propagation
//! convert at the boundary with [`PolarResult::ensure_success`], which
//! yields a standard [`Result`] over [`PolarApiError`].
//!
//! The [`translate`], [`translate_nullable`], and [`translate_void`]
//! functions are the single place raw HTTP responses become results.
//!
//! # Example
//!
//! ```rust
//! use polar_api::result::{ErrorKind, PolarError, PolarResult};
//!
//! let found: PolarResult<String> = PolarResult::success("checkout_1".to_string());
//! assert!(found.is_success());
//!
//! let missing: PolarResult<String> =
//!     PolarResult::failure(PolarError::new(ErrorKind::NotFound, 404, "No such checkout"));
//! assert_eq!(missing.err().map(|e| e.kind), Some(ErrorKind::NotFound));
//! ```

mod error;
mod outcome;
mod page;
mod translate;

pub use error::{ErrorKind, PolarApiError, PolarError};
pub use outcome::PolarResult;
pub use page::{Page, Pagination};
pub use translate::{translate, translate_nullable, translate_void};
