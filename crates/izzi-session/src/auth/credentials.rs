use keyring::Entry;
use tracing::debug;

use super::{SecureStore, StoreError};

/// OS keychain backed secret store.
///
/// Entries are generic passwords keyed by `(service, key)`.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    service: String,
}

impl CredentialStore {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    fn entry(&self, key: &str) -> Result<Entry, keyring::Error> {
        Entry::new(&self.service, key)
    }
}

impl SecureStore for CredentialStore {
    /// Store a value in the OS keychain, replacing any existing entry
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Err(e) = self.delete(key) {
            debug!(key = key, error = %e, "Ignoring failure to clear entry before save");
        }

        let entry = self.entry(key).map_err(|e| write_error(key, e))?;
        entry.set_password(value).map_err(|e| write_error(key, e))?;
        debug!(key = key, service = %self.service, "Stored keychain entry");
        Ok(())
    }

    /// Retrieve a value from the OS keychain
    fn read(&self, key: &str) -> Result<String, StoreError> {
        let entry = self.entry(key).map_err(|e| read_error(key, e))?;
        entry.get_password().map_err(|e| read_error(key, e))
    }

    /// Delete a keychain entry; a missing entry counts as deleted
    fn delete(&self, key: &str) -> Result<(), StoreError> {
        let entry = self.entry(key).map_err(|e| delete_error(key, e))?;
        match entry.delete_credential() {
            Ok(()) => {
                debug!(key = key, service = %self.service, "Deleted keychain entry");
                Ok(())
            }
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(delete_error(key, e)),
        }
    }
}

fn write_error(key: &str, err: keyring::Error) -> StoreError {
    StoreError::Write {
        key: key.to_string(),
        source: Box::new(err),
    }
}

fn read_error(key: &str, err: keyring::Error) -> StoreError {
    match err {
        keyring::Error::NoEntry => StoreError::ItemNotFound(key.to_string()),
        keyring::Error::BadEncoding(_) => StoreError::DataEncoding(key.to_string()),
        other => StoreError::Read {
            key: key.to_string(),
            source: Box::new(other),
        },
    }
}

fn delete_error(key: &str, err: keyring::Error) -> StoreError {
    StoreError::Delete {
        key: key.to_string(),
        source: Box::new(err),
    }
}
