//! Reqwest-backed admin users adapter.
//!
//! This adapter owns transport details only: URL construction, auth headers,
//! timeout and HTTP error mapping. Response bodies are handed to the
//! normalisers, so any JSON shape the API returns becomes a valid record.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde_json::{Value, json};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::ports::{AdminUsersSource, AdminUsersSourceError};
use crate::domain::{AuthContext, ListParams, NormalizedUser, UserStatus};
use crate::normalize::{entity_from_envelope, normalize_admin_user, normalize_admin_users_data};
use pagination::Paginated;

const ADMIN_USERS_PATH: [&str; 4] = ["api", "v1", "admin", "users"];
const REQUEST_ID_HEADER: &str = "X-Request-Id";
/// Characters of an error response body kept in error messages.
const ERROR_BODY_PREVIEW_CHARS: usize = 160;

/// Admin users adapter performing HTTP calls against one API base URL.
pub struct HttpAdminUsersSource {
    client: Client,
    base_url: Url,
    auth: AuthContext,
}

impl HttpAdminUsersSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// Requests carry a bearer token whenever `auth` holds one.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration, auth: AuthContext) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            auth,
        })
    }

    fn users_url(&self, trailing: &[&str]) -> Result<Url, AdminUsersSourceError> {
        build_url(&self.base_url, trailing)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, AdminUsersSourceError> {
        let request_id = Uuid::new_v4();
        let mut request = request
            .header(reqwest::header::ACCEPT, "application/json")
            .header(REQUEST_ID_HEADER, request_id.to_string());
        if let Some(token) = self.auth.token() {
            request = request.bearer_auth(token.as_str());
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let url = response.url().path().to_owned();
        debug!(%request_id, status = status.as_u16(), path = %url, "admin users response received");

        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            let error = map_status_error(status, body.as_ref());
            warn!(
                %request_id,
                status = status.as_u16(),
                path = %url,
                kind = error.kind(),
                "admin users request failed"
            );
            return Err(error);
        }
        parse_body(body.as_ref())
    }
}

#[async_trait]
impl AdminUsersSource for HttpAdminUsersSource {
    async fn list_users(
        &self,
        params: &ListParams,
    ) -> Result<Paginated<NormalizedUser>, AdminUsersSourceError> {
        let mut url = self.users_url(&[])?;
        params.apply_to(&mut url);
        let body = self.send(self.client.get(url)).await?;
        Ok(normalize_admin_users_data(&body))
    }

    async fn update_status(
        &self,
        user_id: &str,
        status: UserStatus,
    ) -> Result<NormalizedUser, AdminUsersSourceError> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(AdminUsersSourceError::invalid_request(
                "user id must not be empty",
            ));
        }
        let url = self.users_url(&[user_id, "status"])?;
        let payload = json!({ "status": status.as_str() });
        let body = self.send(self.client.patch(url).json(&payload)).await?;
        Ok(normalize_admin_user(entity_from_envelope(&body)))
    }
}

fn build_url(base_url: &Url, trailing: &[&str]) -> Result<Url, AdminUsersSourceError> {
    let mut url = base_url.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|()| {
            AdminUsersSourceError::invalid_request(format!(
                "base URL '{base_url}' cannot carry a path"
            ))
        })?
        .pop_if_empty()
        .extend(ADMIN_USERS_PATH)
        .extend(trailing);
    Ok(url)
}

// Empty bodies (e.g. `204 No Content`) normalise like an empty object.
fn parse_body(body: &[u8]) -> Result<Value, AdminUsersSourceError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|error| {
        AdminUsersSourceError::decode(format!("invalid admin users JSON payload: {error}"))
    })
}

// URLs are stripped so search terms never reach error messages or logs.
fn map_transport_error(error: reqwest::Error) -> AdminUsersSourceError {
    let error = error.without_url();
    if error.is_timeout() {
        AdminUsersSourceError::timeout(error.to_string())
    } else if error.is_connect() {
        AdminUsersSourceError::transport(format!("cannot reach admin users API: {error}"))
    } else {
        AdminUsersSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> AdminUsersSourceError {
    let code = status.as_u16();
    let preview = body_preview(body);
    let message = || match preview.as_str() {
        "" => format!("status {code}"),
        detail => format!("status {code}: {detail}"),
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            AdminUsersSourceError::unauthorised(message())
        }
        StatusCode::NOT_FOUND => AdminUsersSourceError::not_found(message()),
        StatusCode::TOO_MANY_REQUESTS => AdminUsersSourceError::rate_limited(message()),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            AdminUsersSourceError::timeout(message())
        }
        _ if status.is_client_error() => AdminUsersSourceError::invalid_request(message()),
        _ => AdminUsersSourceError::status(code, preview),
    }
}

// Whitespace runs collapse to single spaces before truncation.
fn body_preview(body: &[u8]) -> String {
    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    match compact.char_indices().nth(ERROR_BODY_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", compact.get(..cut).unwrap_or_default()),
        None => compact,
    }
}
