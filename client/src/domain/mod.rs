//! Domain primitives for the Skill Swap client.
//!
//! Purpose: Define the strongly-shaped records the UI and CLI consume, the
//! outbound list parameters, and the explicit authentication context used
//! by route guards. Nothing here performs I/O.
//!
//! Public surface:
//! - NormalizedUser / UserStatus: default-filled user row.
//! - ListParams / ListParamsInput / StatusFilter: outbound list query.
//! - AuthContext / AccessToken / Role: explicit session state.
//! - RouteAccess / GuardOutcome: route guard evaluation.

pub mod auth;
pub mod list_params;
pub mod ports;
pub mod route_guard;
pub mod user;

pub use self::auth::{AccessToken, AuthContext, Role, RoleParseError};
pub use self::list_params::{
    DEFAULT_SORT, ListParams, ListParamsInput, StatusFilter, build_list_params,
};
pub use self::route_guard::{GuardOutcome, GuardRedirects, RouteAccess, evaluate_route};
pub use self::user::{NormalizedUser, UNKNOWN_USER_NAME, UserStatus, UserStatusParseError};
