//! Paginated listing types.
//!
//! Polar listing endpoints return a wire shape of
//! `{"items": [...], "pagination": {"page", "limit", "total_count", "max_page"}}`.
//! [`Page<T>`] mirrors that shape exactly, so a listing call translates to
//! `PolarResult<Page<T>>` with no intermediate mapping.
//!
//! The page derefs to its item slice, so `Vec`-style access works directly:
//!
//! ```rust
//! use polar_api::result::{Page, Pagination};
//!
//! let page = Page::new(
//!     vec!["a", "b"],
//!     Pagination { page: 1, limit: 10, total_count: 2, max_page: 1 },
//! );
//!
//! assert_eq!(page.len(), 2);
//! assert_eq!(page[0], "a");
//! assert!(page.is_last());
//! ```

use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Pagination metadata for a listing slice.
///
/// Mirrors the `pagination` object of the wire format. Fields the API
/// omits deserialize as 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// The 1-based index of this page.
    #[serde(default)]
    pub page: u32,
    /// The requested page size.
    #[serde(default)]
    pub limit: u32,
    /// The total number of items across all pages.
    #[serde(default)]
    pub total_count: u64,
    /// The index of the last available page.
    #[serde(default)]
    pub max_page: u32,
}

/// A single slice of a paginated listing.
///
/// # Type Parameters
///
/// * `T` - The item type of the listing (e.g., a product or order model).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items in this slice, in the order the API returned them.
    pub items: Vec<T>,
    /// Metadata for fetching subsequent slices.
    pub pagination: Pagination,
}

impl<T> Page<T> {
    /// Creates a page from items and pagination metadata.
    #[must_use]
    pub const fn new(items: Vec<T>, pagination: Pagination) -> Self {
        Self { items, pagination }
    }

    /// Returns `true` if a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.pagination.page < self.pagination.max_page
    }

    /// Returns `true` if this is the final page (or pagination metadata
    /// was absent).
    #[must_use]
    pub const fn is_last(&self) -> bool {
        !self.has_next()
    }

    /// Returns the index of the next page, if one exists.
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        if self.has_next() {
            Some(self.pagination.page + 1)
        } else {
            None
        }
    }

    /// Consumes the page and returns the items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Provides slice access to the page's items.
impl<T> Deref for Page<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
