//! Session credential helper.
//!
//! Keeps an access token and a refresh token in the OS secure store and
//! performs a single refresh exchange against a caller-supplied endpoint
//! when the access token is suspected to have expired.
//!
//! ```no_run
//! # async fn run() -> Result<(), izzi_session::SessionError> {
//! use izzi_session::{CredentialStore, Session, SessionConfig};
//!
//! let config = SessionConfig::default();
//! let session = Session::new(CredentialStore::new(config.service()), config)?;
//!
//! session.save_tokens("access", "refresh")?;
//! session.refresh_access_token("https://example.com/api/token/refresh").await?;
//! let access = session.access_token()?;
//! # let _ = access;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod error;

pub use api::{ApiClient, ApiError};
pub use auth::{
    CredentialStore, DefaultRefreshRequest, DefaultTokenResponse, MemoryStore, RefreshOptions,
    SecureStore, Session, StoreError, TokenPair,
};
pub use config::SessionConfig;
pub use error::SessionError;
