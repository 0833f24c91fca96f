//! Offset pagination primitives for list endpoints.
//!
//! List endpoints page over results ordered by ascending identifier. Callers
//! describe the window with a [`PageRequest`]: skip the first `skip` items and
//! return at most `limit` of the rest. Neither bound is capped; a caller may
//! ask for an arbitrarily large window.
//!
//! ```
//! use pagination::PageRequest;
//!
//! let page = PageRequest::new(1, 2);
//! let window: Vec<_> = page.apply(["a", "b", "c", "d"]).collect();
//! assert_eq!(window, vec!["b", "c"]);
//! ```

/// Number of items returned when the caller does not supply a limit.
pub const DEFAULT_LIMIT: u64 = 10;

/// Offset window over an ordered result set.
///
/// Request adapters decode optional `skip` and `limit` values themselves and
/// build the window with [`PageRequest::from_parts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    skip: u64,
    limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Build a window skipping `skip` items and returning at most `limit`.
    #[must_use]
    pub const fn new(skip: u64, limit: u64) -> Self {
        Self { skip, limit }
    }

    /// Build a window from optional query values, applying the defaults.
    ///
    /// ```
    /// use pagination::{DEFAULT_LIMIT, PageRequest};
    ///
    /// let page = PageRequest::from_parts(None, None);
    /// assert_eq!(page, PageRequest::new(0, DEFAULT_LIMIT));
    /// ```
    #[must_use]
    pub fn from_parts(skip: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            skip: skip.unwrap_or(0),
            limit: limit.unwrap_or(DEFAULT_LIMIT),
        }
    }

    /// Number of leading items to skip.
    #[must_use]
    pub const fn skip(&self) -> u64 {
        self.skip
    }

    /// Maximum number of items to return.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Offset as a signed SQL value, saturating at `i64::MAX`.
    #[must_use]
    pub fn sql_offset(&self) -> i64 {
        i64::try_from(self.skip).unwrap_or(i64::MAX)
    }

    /// Limit as a signed SQL value, saturating at `i64::MAX`.
    #[must_use]
    pub fn sql_limit(&self) -> i64 {
        i64::try_from(self.limit).unwrap_or(i64::MAX)
    }

    /// Apply the window to an already ordered sequence.
    pub fn apply<I>(self, items: I) -> impl Iterator<Item = I::Item>
    where
        I: IntoIterator,
    {
        let skip = usize::try_from(self.skip).unwrap_or(usize::MAX);
        let take = usize::try_from(self.limit).unwrap_or(usize::MAX);
        items.into_iter().skip(skip).take(take)
    }
}
