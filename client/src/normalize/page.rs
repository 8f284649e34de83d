//! Pagination block normaliser.

use pagination::{Pagination, PaginationParts};
use serde_json::Value;

use super::coerce::{Probe, boolean, count, first_match};

/// Normalise a pagination block of any shape.
///
/// Reads `total`, `page`, `limit`, `totalPages`, `hasNextPage` and
/// `hasPrevPage` (snake_case spellings are accepted as a fallback) and
/// derives whatever is missing. Non-objects yield [`Pagination::default`].
///
/// # Examples
/// ```
/// use serde_json::json;
/// use skill_swap_client::normalize_pagination;
///
/// let pagination = normalize_pagination(&json!({ "total": 25, "limit": 10 }));
/// assert_eq!(pagination.total_pages, 3);
/// assert_eq!(pagination.page, 1);
/// assert!(pagination.has_next_page);
/// assert!(!pagination.has_prev_page);
/// ```
#[must_use]
pub fn normalize_pagination(raw: &Value) -> Pagination {
    Pagination::from_parts(PaginationParts {
        total: count(raw.get("total")),
        page: count(raw.get("page")),
        limit: count(raw.get("limit")),
        total_pages: first_match(
            &[Probe::new(raw, "totalPages"), Probe::new(raw, "total_pages")],
            count,
        ),
        has_next_page: first_match(
            &[Probe::new(raw, "hasNextPage"), Probe::new(raw, "has_next_page")],
            boolean,
        ),
        has_prev_page: first_match(
            &[Probe::new(raw, "hasPrevPage"), Probe::new(raw, "has_prev_page")],
            boolean,
        ),
    })
}
