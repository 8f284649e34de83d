//! Outbound query parameters for paged list endpoints.
//!
//! Callers describe what they want with a partially-populated
//! [`ListParamsInput`]; [`build_list_params`] fills in defaults and drops
//! filters the API should not receive.

use std::fmt;
use std::str::FromStr;

use pagination::{DEFAULT_LIMIT, DEFAULT_PAGE};
use serde::Serialize;
use url::Url;

use super::user::{UserStatus, UserStatusParseError};

/// Sort order requested when the caller does not pick one.
pub const DEFAULT_SORT: &str = "newest";

const ALL_STATUSES: &str = "ALL";

/// Status filter chosen by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// No status filtering; the parameter is omitted.
    #[default]
    All,
    /// Only users in the given status.
    Only(UserStatus),
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_STATUSES),
            Self::Only(status) => fmt::Display::fmt(status, f),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = UserStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL_STATUSES) {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

/// Caller intent for one list request; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParamsInput {
    /// One-based page number.
    pub page: Option<u64>,
    /// Page size.
    pub limit: Option<u64>,
    /// Sort key understood by the API.
    pub sort: Option<String>,
    /// Free-text search term.
    pub search: Option<String>,
    /// Status filter.
    pub status: Option<StatusFilter>,
}

/// Exact parameter set sent to a list endpoint.
///
/// `search` and `status` are absent from the serialised form when `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListParams {
    /// One-based page number.
    pub page: u64,
    /// Page size.
    pub limit: u64,
    /// Sort key.
    pub sort: String,
    /// Trimmed, non-empty search term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Specific status to filter on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

impl Default for ListParams {
    fn default() -> Self {
        build_list_params(ListParamsInput::default())
    }
}

impl ListParams {
    /// Parameters as ordered `(name, value)` pairs.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("sort", self.sort.clone()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_owned()));
        }
        pairs
    }

    /// Append these parameters to `url`'s query string.
    ///
    /// # Examples
    /// ```
    /// use skill_swap_client::domain::{ListParamsInput, build_list_params};
    /// use url::Url;
    ///
    /// let mut url = Url::parse("https://api.example.test/api/v1/admin/users").unwrap();
    /// build_list_params(ListParamsInput::default()).apply_to(&mut url);
    /// assert_eq!(url.query(), Some("page=1&limit=12&sort=newest"));
    /// ```
    pub fn apply_to(&self, url: &mut Url) {
        let mut query = url.query_pairs_mut();
        for (name, value) in self.query_pairs() {
            query.append_pair(name, &value);
        }
    }
}

/// Fill defaults and drop empty filters from caller intent.
///
/// - `page` defaults to 1 and `limit` to 12; zero is raised to 1.
/// - `sort` defaults to [`DEFAULT_SORT`] when absent or blank.
/// - `search` is trimmed and omitted when nothing remains.
/// - `status` is omitted for [`StatusFilter::All`].
///
/// # Examples
/// ```
/// use skill_swap_client::domain::{ListParamsInput, StatusFilter, build_list_params};
///
/// let params = build_list_params(ListParamsInput {
///     search: Some("  ".to_owned()),
///     status: Some(StatusFilter::All),
///     ..ListParamsInput::default()
/// });
/// assert!(params.search.is_none());
/// assert!(params.status.is_none());
/// ```
#[must_use]
pub fn build_list_params(input: ListParamsInput) -> ListParams {
    let sort = input
        .sort
        .filter(|sort| !sort.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SORT.to_owned());
    let search = input
        .search
        .map(|search| search.trim().to_owned())
        .filter(|search| !search.is_empty());
    let status = match input.status {
        Some(StatusFilter::Only(status)) => Some(status),
        Some(StatusFilter::All) | None => None,
    };

    ListParams {
        page: input.page.unwrap_or(DEFAULT_PAGE).max(1),
        limit: input.limit.unwrap_or(DEFAULT_LIMIT).max(1),
        sort,
        search,
        status,
    }
}
