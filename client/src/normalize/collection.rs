//! Response envelope normalisers.

use pagination::{Paginated, Pagination};
use serde_json::Value;

use super::page::normalize_pagination;
use super::user::normalize_admin_user;
use crate::domain::NormalizedUser;

/// JSON pointers where a list of rows may live, in priority order.
const ROW_POINTERS: [&str; 6] = [
    "/data",
    "/data/data",
    "/data/users",
    "/data/items",
    "/users",
    "/items",
];

/// JSON pointers where a pagination block may live, in priority order.
const PAGINATION_POINTERS: [&str; 4] = [
    "/pagination",
    "/meta",
    "/data/pagination",
    "/data/meta",
];

/// Locate rows and page metadata in `raw` and normalise each row.
///
/// Rows come from the first array found at the known envelope locations,
/// or from `raw` itself when it is an array; output order matches the
/// source. Missing rows yield an empty list, a missing pagination block
/// yields [`Pagination::default`].
pub fn normalize_collection<T, F>(raw: &Value, normalize_row: F) -> Paginated<T>
where
    F: Fn(&Value) -> T,
{
    let rows = raw.as_array().or_else(|| {
        ROW_POINTERS
            .iter()
            .find_map(|pointer| raw.pointer(pointer).and_then(Value::as_array))
    });
    let pagination = PAGINATION_POINTERS
        .iter()
        .find_map(|pointer| raw.pointer(pointer).filter(|block| block.is_object()))
        .map_or_else(Pagination::default, normalize_pagination);

    let rows = rows
        .map(|rows| rows.iter().collect::<Vec<_>>())
        .unwrap_or_default();
    Paginated::new(rows, pagination).map(normalize_row)
}

/// Normalise an admin users list response.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use skill_swap_client::normalize_admin_users_data;
///
/// let page = normalize_admin_users_data(&json!({
///     "data": {
///         "users": [{ "id": "a" }, { "id": "b" }, { "id": "c" }],
///         "meta": { "total": 3 }
///     }
/// }));
/// assert_eq!(page.data.len(), 3);
/// assert_eq!(page.pagination.total, 3);
/// ```
#[must_use]
pub fn normalize_admin_users_data(raw: &Value) -> Paginated<NormalizedUser> {
    normalize_collection(raw, normalize_admin_user)
}

/// The entity inside a single-record response: the `data` object when
/// present, otherwise `raw` itself.
#[must_use]
pub fn entity_from_envelope(raw: &Value) -> &Value {
    raw.get("data").filter(|data| data.is_object()).unwrap_or(raw)
}
