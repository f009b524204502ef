use std::fmt;

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use super::refresh::{self, DefaultRefreshRequest, DefaultTokenResponse, RefreshOptions};
use super::{SecureStore, StoreError};
use crate::api::{ApiClient, ApiError};
use crate::config::SessionConfig;
use crate::error::SessionError;

/// Both stored tokens, read together
#[derive(Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// Entry point for token storage and refresh.
///
/// Holds no token state: every call goes straight to the store, and
/// store errors are returned unchanged.
pub struct Session<S> {
    store: S,
    config: SessionConfig,
    client: ApiClient,
}

impl<S: SecureStore> Session<S> {
    /// Create a session over `store` with a default HTTP client
    pub fn new(store: S, config: SessionConfig) -> Result<Self, ApiError> {
        Ok(Self::with_client(store, config, ApiClient::new()?))
    }

    /// Create a session that sends refresh requests through `client`
    pub fn with_client(store: S, config: SessionConfig, client: ApiClient) -> Self {
        Self {
            store,
            config,
            client,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    // ===== Storage =====

    /// Save both tokens. Not transactional: if the refresh token save
    /// fails, the access token has already been written.
    pub fn save_tokens(&self, access_token: &str, refresh_token: &str) -> Result<(), StoreError> {
        self.save_access_token(access_token)?;
        self.save_refresh_token(refresh_token)
    }

    pub fn save_access_token(&self, token: &str) -> Result<(), StoreError> {
        self.store.save(self.config.access_token_key(), token)
    }

    pub fn save_refresh_token(&self, token: &str) -> Result<(), StoreError> {
        self.store.save(self.config.refresh_token_key(), token)
    }

    pub fn access_token(&self) -> Result<String, StoreError> {
        self.store.read(self.config.access_token_key())
    }

    pub fn refresh_token(&self) -> Result<String, StoreError> {
        self.store.read(self.config.refresh_token_key())
    }

    /// Read both tokens, failing on the first one that cannot be read
    pub fn tokens(&self) -> Result<TokenPair, StoreError> {
        Ok(TokenPair {
            access_token: self.access_token()?,
            refresh_token: self.refresh_token()?,
        })
    }

    /// Check if an access token is stored and readable
    pub fn has_access_token(&self) -> bool {
        self.access_token().is_ok()
    }

    /// Check if a refresh token is stored and readable
    pub fn has_refresh_token(&self) -> bool {
        self.refresh_token().is_ok()
    }

    /// Delete both tokens.
    ///
    /// Both deletes are always attempted; the first failure is returned.
    /// Missing entries are not failures.
    pub fn delete_tokens(&self) -> Result<(), StoreError> {
        let access = self.store.delete(self.config.access_token_key());
        if let Err(ref e) = access {
            warn!(error = %e, "Failed to delete access token, still deleting refresh token");
        }
        let refresh = self.store.delete(self.config.refresh_token_key());
        access.and(refresh)
    }

    // ===== Refresh =====

    /// Refresh the access token using the default wire shape:
    /// sends `{"refresh": <token>}` and reads `access` from the reply.
    pub async fn refresh_access_token(&self, endpoint: &str) -> Result<(), SessionError> {
        self.refresh_access_token_with(
            endpoint,
            &RefreshOptions::default(),
            DefaultRefreshRequest::new,
            |response: DefaultTokenResponse| response.access,
        )
        .await
    }

    /// Refresh the access token with caller-shaped request and response types.
    ///
    /// `build_request` turns the stored refresh token into the request body;
    /// `extract_token` pulls the new access token out of the decoded reply.
    /// An empty extracted token fails with `ApiError::MissingToken`.
    /// Nothing is written unless every step succeeds.
    pub async fn refresh_access_token_with<Req, Resp, B, E>(
        &self,
        endpoint: &str,
        options: &RefreshOptions,
        build_request: B,
        extract_token: E,
    ) -> Result<(), SessionError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
        B: FnOnce(&str) -> Req,
        E: FnOnce(Resp) -> String,
    {
        refresh::refresh_access_token(
            &self.store,
            &self.config,
            &self.client,
            endpoint,
            options,
            build_request,
            extract_token,
        )
        .await
    }
}
