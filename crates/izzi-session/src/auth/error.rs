use thiserror::Error;

/// Boxed platform error carried by store failures
pub type BackendError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to write {key} to secure store: {source}")]
    Write {
        key: String,
        #[source]
        source: BackendError,
    },

    #[error("Failed to read {key} from secure store: {source}")]
    Read {
        key: String,
        #[source]
        source: BackendError,
    },

    #[error("Failed to delete {key} from secure store: {source}")]
    Delete {
        key: String,
        #[source]
        source: BackendError,
    },

    #[error("No secure store entry for {0}")]
    ItemNotFound(String),

    #[error("Secure store entry {0} is not a valid string")]
    DataEncoding(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::ItemNotFound(_))
    }
}
