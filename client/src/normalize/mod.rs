//! Defensive normalisation of untyped API payloads.
//!
//! The upstream API names and nests fields differently across endpoints and
//! backend revisions. Every function here is total: malformed input
//! degrades to documented defaults instead of failing, so a response that
//! is present but odd still renders.

pub mod coerce;
mod collection;
mod page;
mod user;

pub use self::collection::{entity_from_envelope, normalize_admin_users_data, normalize_collection};
pub use self::page::normalize_pagination;
pub use self::user::{normalize_admin_user, normalize_status};
