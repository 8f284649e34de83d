//! Driven ports for the Skill Swap API.

mod macros;
pub(crate) use macros::define_port_error;

mod admin_users_source;

#[cfg(test)]
pub use admin_users_source::MockAdminUsersSource;
pub use admin_users_source::{AdminUsersSource, AdminUsersSourceError};
