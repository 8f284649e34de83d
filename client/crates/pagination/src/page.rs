//! Page metadata derivation.

use serde::{Deserialize, Serialize};

/// Page number used when the source does not report one.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when the source does not report one.
pub const DEFAULT_LIMIT: u64 = 12;

/// Optional paging values as extracted from an upstream payload.
///
/// `None` means the source did not supply a usable value; [`Pagination`]
/// fills the gap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationParts {
    /// Total number of items across all pages.
    pub total: Option<u64>,
    /// Current one-based page number.
    pub page: Option<u64>,
    /// Items per page.
    pub limit: Option<u64>,
    /// Explicit page count reported by the source.
    pub total_pages: Option<u64>,
    /// Explicit "next page exists" flag reported by the source.
    pub has_next_page: Option<bool>,
    /// Explicit "previous page exists" flag reported by the source.
    pub has_prev_page: Option<bool>,
}

/// Fully-populated page metadata.
///
/// ## Invariants
/// - `page`, `limit` and `total_pages` are at least 1.
/// - Without an explicit source value, `total_pages` equals
///   [`page_count`] of `total` and `limit`.
/// - Without explicit source flags, `has_next_page` is `page < total_pages`
///   and `has_prev_page` is `page > 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Total number of items across all pages.
    pub total: u64,
    /// Current one-based page number.
    pub page: u64,
    /// Items per page.
    pub limit: u64,
    /// Number of pages available.
    pub total_pages: u64,
    /// Whether a page after `page` exists.
    pub has_next_page: bool,
    /// Whether a page before `page` exists.
    pub has_prev_page: bool,
}

impl Pagination {
    /// Derive complete page metadata from whatever the source supplied.
    ///
    /// # Example
    ///
    /// ```
    /// use pagination::{Pagination, PaginationParts};
    ///
    /// let pagination = Pagination::from_parts(PaginationParts {
    ///     total: Some(0),
    ///     limit: Some(0),
    ///     ..PaginationParts::default()
    /// });
    /// assert_eq!(pagination.total_pages, 1);
    /// assert_eq!(pagination.limit, 1);
    /// ```
    #[must_use]
    pub const fn from_parts(parts: PaginationParts) -> Self {
        let total = match parts.total {
            Some(total) => total,
            None => 0,
        };
        let page = at_least_one(match parts.page {
            Some(page) => page,
            None => DEFAULT_PAGE,
        });
        let limit = at_least_one(match parts.limit {
            Some(limit) => limit,
            None => DEFAULT_LIMIT,
        });
        let total_pages = at_least_one(match parts.total_pages {
            Some(total_pages) => total_pages,
            None => page_count(total, limit),
        });
        let has_next_page = match parts.has_next_page {
            Some(flag) => flag,
            None => page < total_pages,
        };
        let has_prev_page = match parts.has_prev_page {
            Some(flag) => flag,
            None => page > 1,
        };

        Self {
            total,
            page,
            limit,
            total_pages,
            has_next_page,
            has_prev_page,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::from_parts(PaginationParts::default())
    }
}

/// Number of pages needed to show `total` items `limit` at a time.
///
/// A zero `limit` is treated as 1 and the result is never below 1, so an
/// empty listing still reports a single (empty) page.
///
/// # Example
///
/// ```
/// use pagination::page_count;
///
/// assert_eq!(page_count(25, 10), 3);
/// assert_eq!(page_count(0, 0), 1);
/// ```
#[must_use]
pub const fn page_count(total: u64, limit: u64) -> u64 {
    at_least_one(total.div_ceil(at_least_one(limit)))
}

const fn at_least_one(value: u64) -> u64 {
    if value == 0 { 1 } else { value }
}

#[cfg(test)]
mod tests {
    //! Unit coverage for page metadata derivation.

    use super::*;
    use rstest::rstest;

    fn parts(total: Option<u64>, page: Option<u64>, limit: Option<u64>) -> PaginationParts {
        PaginationParts {
            total,
            page,
            limit,
            ..PaginationParts::default()
        }
    }

    #[rstest]
    #[case(25, 10, 3)]
    #[case(30, 10, 3)]
    #[case(31, 10, 4)]
    #[case(0, 12, 1)]
    #[case(0, 0, 1)]
    #[case(5, 0, 5)]
    #[case(1, 100, 1)]
    fn page_count_rounds_up_and_never_drops_below_one(
        #[case] total: u64,
        #[case] limit: u64,
        #[case] expected: u64,
    ) {
        assert_eq!(page_count(total, limit), expected);
    }

    #[test]
    fn default_is_single_empty_page() {
        let pagination = Pagination::default();
        assert_eq!(
            pagination,
            Pagination {
                total: 0,
                page: 1,
                limit: 12,
                total_pages: 1,
                has_next_page: false,
                has_prev_page: false,
            }
        );
    }

    #[test]
    fn derives_flags_from_page_position() {
        let pagination = Pagination::from_parts(parts(Some(25), Some(2), Some(10)));
        assert_eq!(pagination.total_pages, 3);
        assert!(pagination.has_next_page);
        assert!(pagination.has_prev_page);

        let last = Pagination::from_parts(parts(Some(25), Some(3), Some(10)));
        assert!(!last.has_next_page);
        assert!(last.has_prev_page);
    }

    #[test]
    fn explicit_values_win_over_derived_ones() {
        let pagination = Pagination::from_parts(PaginationParts {
            total: Some(25),
            page: Some(1),
            limit: Some(10),
            total_pages: Some(7),
            has_next_page: Some(false),
            has_prev_page: Some(true),
        });
        assert_eq!(pagination.total_pages, 7);
        assert!(!pagination.has_next_page);
        assert!(pagination.has_prev_page);
    }

    #[rstest]
    #[case(Some(0), 1)]
    #[case(None, 1)]
    fn explicit_zero_page_count_is_clamped(#[case] total_pages: Option<u64>, #[case] expected: u64) {
        let pagination = Pagination::from_parts(PaginationParts {
            total_pages,
            ..PaginationParts::default()
        });
        assert_eq!(pagination.total_pages, expected);
    }

    #[test]
    fn zero_page_and_limit_are_raised_to_one() {
        let pagination = Pagination::from_parts(parts(Some(3), Some(0), Some(0)));
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit, 1);
        assert_eq!(pagination.total_pages, 3);
        assert!(!pagination.has_prev_page);
    }
}
