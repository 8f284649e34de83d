//! Skill Swap client core.
//!
//! Normalises shape-variable API payloads into strongly-shaped records,
//! builds outbound list parameters, evaluates route guards against an
//! explicit authentication context, and talks to the admin users API.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod normalize;
pub mod outbound;

pub use domain::{
    AuthContext, ListParams, ListParamsInput, NormalizedUser, StatusFilter, UserStatus,
    build_list_params,
};
pub use normalize::{
    normalize_admin_user, normalize_admin_users_data, normalize_pagination, normalize_status,
};
pub use pagination::{Paginated, Pagination};
