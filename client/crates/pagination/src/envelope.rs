//! Collection envelope pairing one page of items with its metadata.

use serde::{Deserialize, Serialize};

use crate::page::Pagination;

/// One page of items together with its page metadata.
///
/// Item order is preserved exactly as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Items on this page.
    pub data: Vec<T>,
    /// Page metadata describing `data`.
    pub pagination: Pagination,
}

impl<T> Paginated<T> {
    /// Pair `data` with `pagination`.
    #[must_use]
    pub const fn new(data: Vec<T>, pagination: Pagination) -> Self {
        Self { data, pagination }
    }

    /// Number of items on this page.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this page holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Transform every item, keeping order and page metadata.
    #[must_use]
    pub fn map<U, F>(self, transform: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            data: self.data.into_iter().map(transform).collect(),
            pagination: self.pagination,
        }
    }
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self::new(Vec::new(), Pagination::default())
    }
}

#[cfg(test)]
mod tests {
    //! Unit coverage for the collection envelope.

    use super::*;
    use crate::page::PaginationParts;
    use serde_json::json;

    #[test]
    fn default_envelope_is_empty_single_page() {
        let envelope: Paginated<u8> = Paginated::default();
        assert!(envelope.is_empty());
        assert_eq!(envelope.pagination.total_pages, 1);
    }

    #[test]
    fn map_keeps_order_and_metadata() {
        let pagination = Pagination::from_parts(PaginationParts {
            total: Some(3),
            ..PaginationParts::default()
        });
        let envelope = Paginated::new(vec![3, 1, 2], pagination).map(|n| n * 10);
        assert_eq!(envelope.data, vec![30, 10, 20]);
        assert_eq!(envelope.pagination, pagination);
        assert_eq!(envelope.len(), 3);
    }

    #[test]
    fn serialises_with_camel_case_metadata() {
        let envelope = Paginated::new(vec!["a"], Pagination::default());
        let value = serde_json::to_value(&envelope).unwrap_or_default();
        assert_eq!(
            value,
            json!({
                "data": ["a"],
                "pagination": {
                    "total": 0,
                    "page": 1,
                    "limit": 12,
                    "totalPages": 1,
                    "hasNextPage": false,
                    "hasPrevPage": false
                }
            })
        );
    }
}
