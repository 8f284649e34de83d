//! HTTP outbound adapters.
//!
//! This module provides a thin reqwest implementation of the
//! `AdminUsersSource` port.

mod admin_users;

pub use admin_users::HttpAdminUsersSource;
