//! Normalised user read model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Display name used when a row carries no usable name.
pub const UNKNOWN_USER_NAME: &str = "Unknown User";

/// Moderation state of a user account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    /// Account in good standing.
    #[default]
    Active,
    /// Account temporarily blocked by an administrator.
    Suspended,
    /// Account permanently blocked by an administrator.
    Banned,
}

impl UserStatus {
    /// Wire token sent to and received from the API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Suspended => "SUSPENDED",
            Self::Banned => "BANNED",
        }
    }

    /// Match `raw` against the wire tokens, ignoring case.
    ///
    /// Returns `None` for anything else, letting callers tell an explicit
    /// `ACTIVE` apart from an unrecognised value.
    ///
    /// # Examples
    /// ```
    /// use skill_swap_client::UserStatus;
    ///
    /// assert_eq!(UserStatus::parse_token("banned"), Some(UserStatus::Banned));
    /// assert_eq!(UserStatus::parse_token("deleted"), None);
    /// ```
    #[must_use]
    pub fn parse_token(raw: &str) -> Option<Self> {
        match raw.to_uppercase().as_str() {
            "ACTIVE" => Some(Self::Active),
            "SUSPENDED" => Some(Self::Suspended),
            "BANNED" => Some(Self::Banned),
            _ => None,
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text names no known [`UserStatus`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown user status '{value}'; expected ACTIVE, SUSPENDED or BANNED")]
pub struct UserStatusParseError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for UserStatus {
    type Err = UserStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_token(s.trim()).ok_or_else(|| UserStatusParseError {
            value: s.to_owned(),
        })
    }
}

/// User row with every field populated.
///
/// ## Invariants
/// - `id`, `name` and `email` are always present; `name` falls back to
///   [`UNKNOWN_USER_NAME`], the others to the empty string.
/// - `status` is always one of the [`UserStatus`] variants.
/// - Serialising and normalising again yields an equal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedUser {
    /// Stable user identifier as reported by the API.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email; empty when unknown.
    pub email: String,
    /// Avatar URL, if any candidate field carried one.
    pub image: Option<String>,
    /// Moderation status.
    pub status: UserStatus,
    /// Gamification points.
    pub points: f64,
    /// Earned badges, passed through untouched.
    pub badges: Vec<Value>,
}

impl Default for NormalizedUser {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: UNKNOWN_USER_NAME.to_owned(),
            email: String::new(),
            image: None,
            status: UserStatus::default(),
            points: 0.0,
            badges: Vec::new(),
        }
    }
}
