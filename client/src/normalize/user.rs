//! User row normaliser.

use serde_json::Value;

use super::coerce::{Probe, first_match, image_url_from_unknown, number, text};
use crate::domain::{NormalizedUser, UNKNOWN_USER_NAME, UserStatus};

/// Keys that may wrap the user fields of a row, in priority order.
const USER_OBJECT_KEYS: [&str; 3] = ["user", "userId", "profile"];

/// Keys that may hold an avatar on a user-like record, in priority order.
const IMAGE_KEYS: [&str; 8] = [
    "image",
    "avatar",
    "avatarUrl",
    "profileImage",
    "picture",
    "photo",
    "userImage",
    "imageUrl",
];

/// Nested records searched for an avatar when the row itself has none.
const NESTED_IMAGE_KEYS: [&str; 2] = ["user", "profile"];

/// Map a raw status to a [`UserStatus`].
///
/// Upper-cases the text; exactly `SUSPENDED` or `BANNED` map to those
/// variants and everything else, including absence, to `ACTIVE`.
///
/// # Examples
/// ```
/// use skill_swap_client::{UserStatus, normalize_status};
///
/// assert_eq!(normalize_status(Some("Suspended")), UserStatus::Suspended);
/// assert_eq!(normalize_status(Some("unknown")), UserStatus::Active);
/// assert_eq!(normalize_status(None), UserStatus::Active);
/// ```
#[must_use]
pub fn normalize_status(raw: Option<&str>) -> UserStatus {
    match raw.map(str::to_uppercase).as_deref() {
        Some("SUSPENDED") => UserStatus::Suspended,
        Some("BANNED") => UserStatus::Banned,
        _ => UserStatus::Active,
    }
}

/// Normalise one admin user row.
///
/// The row may carry user fields directly or wrap them in `user`,
/// `userId` (as an object) or `profile`. Row-level fields take priority over
/// the wrapped record. Never fails; see [`NormalizedUser`] for defaults.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use skill_swap_client::{UserStatus, normalize_admin_user};
///
/// let user = normalize_admin_user(&json!({
///     "user": { "id": "u1", "name": "Ann" },
///     "status": "BANNED"
/// }));
/// assert_eq!(user.id, "u1");
/// assert_eq!(user.name, "Ann");
/// assert_eq!(user.email, "");
/// assert_eq!(user.status, UserStatus::Banned);
/// ```
#[must_use]
pub fn normalize_admin_user(raw: &Value) -> NormalizedUser {
    let user = user_object(raw);

    let id = first_match(
        &[
            Probe::new(raw, "id"),
            Probe::new(raw, "_id"),
            Probe::new(raw, "userId"),
            Probe::new(user, "id"),
            Probe::new(user, "_id"),
        ],
        text,
    );
    let name = first_match(
        &[
            Probe::new(raw, "name"),
            Probe::new(raw, "userName"),
            Probe::new(user, "name"),
            Probe::new(user, "userName"),
        ],
        text,
    );
    let email = first_match(&[Probe::new(raw, "email"), Probe::new(user, "email")], text);
    let status = first_match(&[Probe::new(raw, "status"), Probe::new(user, "status")], text);
    let points = first_match(&[Probe::new(raw, "points"), Probe::new(user, "points")], number);
    let badges = first_match(&[Probe::new(raw, "badges"), Probe::new(user, "badges")], |v| {
        v.and_then(Value::as_array).cloned()
    });

    NormalizedUser {
        id: id.unwrap_or_default(),
        name: name.unwrap_or_else(|| UNKNOWN_USER_NAME.to_owned()),
        email: email.unwrap_or_default(),
        image: image(raw),
        status: normalize_status(status.as_deref()),
        points: points.unwrap_or(0.0),
        badges: badges.unwrap_or_default(),
    }
}

fn user_object(raw: &Value) -> &Value {
    USER_OBJECT_KEYS
        .iter()
        .find_map(|key| raw.get(*key).filter(|nested| nested.is_object()))
        .unwrap_or(raw)
}

fn image(record: &Value) -> Option<String> {
    direct_image(record).or_else(|| {
        NESTED_IMAGE_KEYS
            .iter()
            .filter_map(|key| record.get(*key))
            .filter(|nested| nested.is_object())
            .find_map(image)
    })
}

fn direct_image(record: &Value) -> Option<String> {
    IMAGE_KEYS
        .iter()
        .find_map(|key| image_url_from_unknown(record.get(*key)))
}
