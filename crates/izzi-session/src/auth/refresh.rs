//! One-shot access token refresh.
//!
//! Reads the stored refresh token, POSTs a caller-shaped request to the
//! refresh endpoint and writes the returned access token back. A failure
//! at any step aborts before the store is written.

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, info};

use super::SecureStore;
use crate::api::{ApiClient, ApiError};
use crate::config::SessionConfig;
use crate::error::SessionError;

/// Request body sent by the default refresh exchange: `{"refresh": "<token>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultRefreshRequest {
    pub refresh: String,
}

impl DefaultRefreshRequest {
    pub fn new(refresh_token: &str) -> Self {
        Self {
            refresh: refresh_token.to_string(),
        }
    }
}

/// Response body expected by the default refresh exchange: `{"access": "<token>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultTokenResponse {
    pub access: String,
}

/// Extra request settings for a refresh call
#[derive(Debug, Clone, Default)]
pub struct RefreshOptions {
    /// Headers sent with the POST. A `Content-Type` here replaces the JSON default.
    /// Names are matched case-insensitively; prefer `header()`, which
    /// lowercases names so a later call replaces an earlier one.
    pub headers: HashMap<String, String>,
}

impl RefreshOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    fn headers(&self) -> Option<&HashMap<String, String>> {
        if self.headers.is_empty() {
            None
        } else {
            Some(&self.headers)
        }
    }
}

/// Exchange the stored refresh token for a new access token and store it.
///
/// A store failure while reading the refresh token is returned as-is, so a
/// missing token surfaces as `StoreError::ItemNotFound`.
pub(crate) async fn refresh_access_token<S, Req, Resp, B, E>(
    store: &S,
    config: &SessionConfig,
    client: &ApiClient,
    endpoint: &str,
    options: &RefreshOptions,
    build_request: B,
    extract_token: E,
) -> Result<(), SessionError>
where
    S: SecureStore + ?Sized,
    Req: Serialize,
    Resp: DeserializeOwned,
    B: FnOnce(&str) -> Req,
    E: FnOnce(Resp) -> String,
{
    let refresh_token = store.read(config.refresh_token_key())?;
    let request = build_request(&refresh_token);

    debug!(endpoint = endpoint, "Refreshing access token");
    let response: Resp = client
        .post_json(endpoint, options.headers(), &request)
        .await?;

    let access_token = extract_token(response);
    if access_token.is_empty() {
        return Err(ApiError::MissingToken.into());
    }

    store.save(config.access_token_key(), &access_token)?;
    info!(endpoint = endpoint, "Access token refreshed");
    Ok(())
}
