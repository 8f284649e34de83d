//! Explicit authentication context.
//!
//! Session state is threaded through the composition root as an
//! [`AuthContext`] value instead of being read from ambient storage, so
//! route guards and adapters can be exercised without a storage stub.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::Zeroizing;

/// Bearer token issued by the API after login.
///
/// The token is zeroised on drop and redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(Zeroizing<String>);

impl AccessToken {
    /// Wrap a raw token, rejecting blank input.
    ///
    /// # Examples
    /// ```
    /// use skill_swap_client::domain::AccessToken;
    ///
    /// assert!(AccessToken::new("  ").is_none());
    /// assert_eq!(AccessToken::new(" abc ").unwrap().as_str(), "abc");
    /// ```
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(Zeroizing::new(trimmed.to_owned())))
    }

    /// Token text for the `Authorization` header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Role granted to the signed-in user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Regular marketplace member.
    #[default]
    User,
    /// Administrator with access to moderation tooling.
    Admin,
}

/// Error returned when text names no known [`Role`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role '{value}'; expected USER or ADMIN")]
pub struct RoleParseError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USER" => Ok(Self::User),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(RoleParseError {
                value: s.to_owned(),
            }),
        }
    }
}

/// Who, if anyone, is signed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    token: Option<AccessToken>,
    role: Role,
}

impl AuthContext {
    /// Context with no session.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Context for a signed-in user.
    #[must_use]
    pub const fn signed_in(token: AccessToken, role: Role) -> Self {
        Self {
            token: Some(token),
            role,
        }
    }

    /// Build a context from optional raw parts; a blank token means anonymous.
    #[must_use]
    pub fn from_parts(token: Option<&str>, role: Option<Role>) -> Self {
        token
            .and_then(AccessToken::new)
            .map_or_else(Self::anonymous, |token| {
                Self::signed_in(token, role.unwrap_or_default())
            })
    }

    /// Bearer token, when signed in.
    #[must_use]
    pub const fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    /// Whether a session token is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Whether the signed-in user is an administrator.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.role == Role::Admin
    }
}
