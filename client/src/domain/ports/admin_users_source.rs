//! Driven port for the admin users API.
//!
//! The domain owns the request and response contract; adapters own transport
//! and hand back normalised records, so callers never see raw payloads.

use async_trait::async_trait;
use pagination::Paginated;

use super::define_port_error;
use crate::domain::{ListParams, NormalizedUser, UserStatus};

define_port_error! {
    /// Errors surfaced while calling the admin users API.
    pub enum AdminUsersSourceError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "admin users transport failed: {message}",
        /// The request exceeded its timeout.
        Timeout { message: String } =>
            "admin users request timed out: {message}",
        /// The session is missing, expired or lacks admin rights.
        Unauthorised { message: String } =>
            "admin users request unauthorised: {message}",
        /// The addressed user does not exist.
        NotFound { message: String } =>
            "admin user not found: {message}",
        /// The API rate-limited the request.
        RateLimited { message: String } =>
            "admin users request rate limited: {message}",
        /// The request was rejected as malformed.
        InvalidRequest { message: String } =>
            "admin users request invalid: {message}",
        /// The response body was not JSON.
        Decode { message: String } =>
            "admin users response decode failed: {message}",
        /// The API answered with an unexpected server-side status.
        Status { status: u16, message: String } =>
            "admin users request failed with status {status}: {message}",
    }
}

impl AdminUsersSourceError {
    /// Return whether retrying this error is expected to help.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }
}

/// Port for listing and moderating users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminUsersSource: Send + Sync {
    /// Fetch one page of users matching `params`.
    async fn list_users(
        &self,
        params: &ListParams,
    ) -> Result<Paginated<NormalizedUser>, AdminUsersSourceError>;

    /// Set the moderation status of `user_id` and return the updated user.
    async fn update_status(
        &self,
        user_id: &str,
        status: UserStatus,
    ) -> Result<NormalizedUser, AdminUsersSourceError>;
}
