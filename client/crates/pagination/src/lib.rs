//! Page-count invariants and list envelopes for Skill Swap list endpoints.
//!
//! The Skill Swap API reports paging metadata inconsistently: some endpoints
//! send `totalPages`, some only `total` and `limit`, and some omit the block
//! entirely. This crate owns the arithmetic that turns whatever subset is
//! available into a complete [`Pagination`] record, independent of how the
//! values were extracted from JSON.
//!
//! # Example
//!
//! ```
//! use pagination::{Pagination, PaginationParts};
//!
//! let pagination = Pagination::from_parts(PaginationParts {
//!     total: Some(25),
//!     limit: Some(10),
//!     ..PaginationParts::default()
//! });
//!
//! assert_eq!(pagination.total_pages, 3);
//! assert!(pagination.has_next_page);
//! assert!(!pagination.has_prev_page);
//! ```

mod envelope;
mod page;

pub use envelope::Paginated;
pub use page::{DEFAULT_LIMIT, DEFAULT_PAGE, Pagination, PaginationParts, page_count};
