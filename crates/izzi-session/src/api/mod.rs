//! JSON-over-HTTP client used by the token refresh flow.
//!
//! The client sends a single POST per call. There are no retries and no
//! timeout beyond whatever `reqwest` applies by default.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
