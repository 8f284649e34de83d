//! Client configuration loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::{AuthContext, Role, RoleParseError};

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Error raised when configured values cannot be interpreted.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The API base URL is not a valid absolute URL.
    #[error("invalid API base URL '{value}': {source}")]
    InvalidBaseUrl {
        /// The rejected value.
        value: String,
        /// Parser failure.
        source: url::ParseError,
    },
    /// The configured role is not recognised.
    #[error(transparent)]
    InvalidRole(#[from] RoleParseError),
}

/// Settings controlling how the client reaches the Skill Swap API.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SKILL_SWAP")]
pub struct ClientSettings {
    /// Base URL of the Skill Swap API.
    pub api_base_url: Option<String>,
    /// Bearer token for the signed-in session.
    pub access_token: Option<String>,
    /// Role of the signed-in session (`USER` or `ADMIN`).
    pub role: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl ClientSettings {
    /// Return the configured base URL, falling back to the local default.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBaseUrl`] when the value does not parse.
    pub fn api_base_url(&self) -> Result<Url, SettingsError> {
        let raw = self
            .api_base_url
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE_URL);
        Url::parse(raw).map_err(|source| SettingsError::InvalidBaseUrl {
            value: raw.to_owned(),
            source,
        })
    }

    /// Return the configured request timeout, falling back to the default.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS).max(1))
    }

    /// Build the explicit authentication context from configured values.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidRole`] when `role` is not recognised.
    pub fn auth_context(&self) -> Result<AuthContext, SettingsError> {
        let role = self
            .role
            .as_deref()
            .map(str::parse::<Role>)
            .transpose()?;
        Ok(AuthContext::from_parts(self.access_token.as_deref(), role))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for client configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ClientSettings {
        ClientSettings::load_from_iter([OsString::from("skill-swap-admin")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("SKILL_SWAP_API_BASE_URL", None::<String>),
            ("SKILL_SWAP_ACCESS_TOKEN", None::<String>),
            ("SKILL_SWAP_ROLE", None::<String>),
            ("SKILL_SWAP_TIMEOUT_SECS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.api_base_url().expect("default url parses").as_str(),
            "http://localhost:8080/"
        );
        assert_eq!(settings.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(!settings.auth_context().expect("no role").is_authenticated());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "SKILL_SWAP_API_BASE_URL",
                Some("https://swap.example.test/".to_owned()),
            ),
            ("SKILL_SWAP_ACCESS_TOKEN", Some("tok-123".to_owned())),
            ("SKILL_SWAP_ROLE", Some("admin".to_owned())),
            ("SKILL_SWAP_TIMEOUT_SECS", Some("3".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.api_base_url().expect("url parses").as_str(),
            "https://swap.example.test/"
        );
        assert_eq!(settings.timeout(), Duration::from_secs(3));
        let ctx = settings.auth_context().expect("role parses");
        assert!(ctx.is_admin());
        assert_eq!(ctx.token().map(|token| token.as_str()), Some("tok-123"));
    }

    #[rstest]
    fn invalid_values_are_reported() {
        let settings = ClientSettings {
            api_base_url: Some("not a url".to_owned()),
            access_token: None,
            role: Some("owner".to_owned()),
            timeout_secs: Some(0),
        };
        assert!(matches!(
            settings.api_base_url(),
            Err(SettingsError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            settings.auth_context(),
            Err(SettingsError::InvalidRole(_))
        ));
        assert_eq!(settings.timeout(), Duration::from_secs(1));
    }
}
