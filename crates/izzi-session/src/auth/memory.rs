//! In-process secret store.
//!
//! Nothing is persisted; entries live as long as the store. Used where
//! no platform keychain is reachable, e.g. CI on headless Linux.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard};

use super::{SecureStore, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("entries", &self.len())
            .finish()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // Every mutation is a single insert/remove, so a poisoned map is still consistent
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SecureStore for MemoryStore {
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.lock();
        entries.remove(key);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn read(&self, key: &str) -> Result<String, StoreError> {
        self.lock()
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::ItemNotFound(key.to_string()))
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_read() {
        let store = MemoryStore::new();
        store.save("k", "value").unwrap();
        assert_eq!(store.read("k").unwrap(), "value");
    }

    #[test]
    fn test_last_write_wins() {
        let store = MemoryStore::new();
        store.save("k", "v1").unwrap();
        store.save("k", "v2").unwrap();
        assert_eq!(store.read("k").unwrap(), "v2");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_read_missing() {
        let store = MemoryStore::new();
        let err = store.read("missing").unwrap_err();
        assert!(matches!(err, StoreError::ItemNotFound(ref key) if key == "missing"));
    }

    #[test]
    fn test_delete_missing_is_ok() {
        let store = MemoryStore::new();
        assert!(store.delete("missing").is_ok());
    }

    #[test]
    fn test_delete_removes_entry() {
        let store = MemoryStore::new();
        store.save("k", "v").unwrap();
        store.delete("k").unwrap();
        assert!(store.read("k").unwrap_err().is_not_found());
        assert!(store.is_empty());
    }

    #[test]
    fn test_debug_hides_values() {
        let store = MemoryStore::new();
        store.save("izzi.Auth.accessToken", "secret-access").unwrap();
        let debug = format!("{:?}", store);
        assert!(!debug.contains("secret"));
        assert!(!debug.contains("accessToken"));
        assert_eq!(debug, "MemoryStore { entries: 1 }");
    }

    #[test]
    fn test_empty_and_unicode_values() {
        let store = MemoryStore::new();
        store.save("empty", "").unwrap();
        store.save("unicode", "tökén ✓").unwrap();
        assert_eq!(store.read("empty").unwrap(), "");
        assert_eq!(store.read("unicode").unwrap(), "tökén ✓");
    }
}
