use thiserror::Error;

use crate::api::ApiError;
use crate::auth::StoreError;

/// Failure of an operation that touches both the secure store and the network.
///
/// Both sides are forwarded unchanged so callers can match on the
/// underlying kind.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SessionError {
    /// True when the failure is a missing secure store entry
    pub fn is_not_found(&self) -> bool {
        matches!(self, SessionError::Store(StoreError::ItemNotFound(_)))
    }

    /// HTTP status code if the endpoint answered outside 2xx
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SessionError::Api(ApiError::HttpStatus { code, .. }) => Some(*code),
            _ => None,
        }
    }
}
