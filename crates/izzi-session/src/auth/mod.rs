//! Token storage and refresh.
//!
//! This module provides:
//! - `SecureStore`: key/value contract for secret storage
//! - `CredentialStore`: OS keychain backend via keyring
//! - `MemoryStore`: process-local backend for tests and headless hosts
//! - `Session`: facade over the store and the refresh exchange
//!
//! Every save is delete-then-insert, and deleting a missing entry succeeds.

pub mod credentials;
pub mod error;
pub mod memory;
pub mod refresh;
pub mod session;

use std::sync::Arc;

pub use credentials::CredentialStore;
pub use error::{BackendError, StoreError};
pub use memory::MemoryStore;
pub use refresh::{DefaultRefreshRequest, DefaultTokenResponse, RefreshOptions};
pub use session::{Session, TokenPair};

/// Key/value secret storage.
///
/// Implementations provide no locking beyond what the backend offers;
/// two calls are two independent operations.
pub trait SecureStore: Send + Sync {
    /// Store `value` under `key`, replacing any existing entry
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Read the value stored under `key`
    fn read(&self, key: &str) -> Result<String, StoreError>;

    /// Remove the entry under `key`. A missing entry is not an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: SecureStore + ?Sized> SecureStore for &S {
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).save(key, value)
    }

    fn read(&self, key: &str) -> Result<String, StoreError> {
        (**self).read(key)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key)
    }
}

impl<S: SecureStore + ?Sized> SecureStore for Arc<S> {
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).save(key, value)
    }

    fn read(&self, key: &str) -> Result<String, StoreError> {
        (**self).read(key)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key)
    }
}
