//! Key identifiers for the stored tokens.
//!
//! The two tokens live under fixed keys scoped by a namespace prefix,
//! e.g. `izzi.Auth.accessToken`. The keyring service name groups the
//! entries in the platform store.

/// Default keyring service name
const DEFAULT_SERVICE: &str = "izzi-session";

/// Default namespace prefix for token keys
const DEFAULT_NAMESPACE: &str = "izzi.Auth";

const ACCESS_TOKEN_SUFFIX: &str = "accessToken";
const REFRESH_TOKEN_SUFFIX: &str = "refreshToken";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    service: String,
    access_token_key: String,
    refresh_token_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::with_namespace(DEFAULT_NAMESPACE)
    }
}

impl SessionConfig {
    /// Build a config whose token keys are scoped under `namespace`
    pub fn with_namespace(namespace: &str) -> Self {
        Self {
            service: DEFAULT_SERVICE.to_string(),
            access_token_key: format!("{}.{}", namespace, ACCESS_TOKEN_SUFFIX),
            refresh_token_key: format!("{}.{}", namespace, REFRESH_TOKEN_SUFFIX),
        }
    }

    /// Override the keyring service name
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn access_token_key(&self) -> &str {
        &self.access_token_key
    }

    pub fn refresh_token_key(&self) -> &str {
        &self.refresh_token_key
    }
}
