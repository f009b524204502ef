//! JSON POST client for the refresh endpoint.

use std::collections::HashMap;

use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Url};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use super::ApiError;

/// Content type applied when the caller does not supply one
const JSON_CONTENT_TYPE: &str = "application/json";

/// User agent sent with every request
const USER_AGENT: &str = concat!("izzi-session/", env!("CARGO_PKG_VERSION"));

/// HTTP client for JSON POST exchanges.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    /// Create a new client with `reqwest`'s default timeouts
    pub fn new() -> Result<Self, ApiError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// Wrap an existing `reqwest::Client`, sharing its connection pool
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// POST `body` as JSON to `url` and decode the JSON reply as `R`.
    ///
    /// Caller headers are applied first; `Content-Type: application/json`
    /// is added only when the caller did not set a content type. Header names
    /// are case-insensitive; if two keys differ only in case, the one that
    /// sorts last byte-wise wins. Any status outside 200..=299 is an error.
    pub async fn post_json<B, R>(
        &self,
        url: &str,
        headers: Option<&HashMap<String, String>>,
        body: &B,
    ) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = Url::parse(url).map_err(|e| ApiError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let headers = build_headers(headers)?;
        let payload = serde_json::to_vec(body).map_err(ApiError::Encoding)?;

        debug!(url = %url, "Sending POST request");
        let response = self
            .client
            .post(url.clone())
            .headers(headers)
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !(200..=299).contains(&status.as_u16()) {
            let body = String::from_utf8_lossy(&bytes);
            warn!(url = %url, status = status.as_u16(), body = %ApiError::truncate_body(&body), "Request failed");
            return Err(ApiError::from_status(status, &body));
        }

        serde_json::from_slice(&bytes).map_err(|source| {
            let body = ApiError::truncate_body(&String::from_utf8_lossy(&bytes));
            warn!(url = %url, error = %source, body = %body, "Failed to decode response");
            ApiError::Decoding { source, body }
        })
    }
}

/// Convert caller headers into a `HeaderMap`, defaulting the content type
fn build_headers(headers: Option<&HashMap<String, String>>) -> Result<HeaderMap, ApiError> {
    let mut map = HeaderMap::new();

    if let Some(headers) = headers {
        // Sorted so that names differing only in case resolve the same way every call
        let mut entries: Vec<_> = headers.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        for (raw_name, raw_value) in entries {
            let name = HeaderName::from_bytes(raw_name.as_bytes())
                .map_err(|_| ApiError::InvalidHeader(raw_name.clone()))?;
            let value = HeaderValue::from_str(raw_value)
                .map_err(|_| ApiError::InvalidHeader(raw_name.clone()))?;
            map.insert(name, value);
        }
    }

    if !map.contains_key(header::CONTENT_TYPE) {
        map.insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_headers_defaults_content_type() {
        let map = build_headers(None).expect("headers");
        assert_eq!(map.get(header::CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_build_headers_keeps_caller_content_type() {
        // Header names are case-insensitive
        let headers = HashMap::from([
            ("content-type".to_string(), "application/vnd.api+json".to_string()),
            ("X-Client".to_string(), "ios".to_string()),
        ]);
        let map = build_headers(Some(&headers)).expect("headers");
        assert_eq!(map.get(header::CONTENT_TYPE).unwrap(), "application/vnd.api+json");
        assert_eq!(map.get("x-client").unwrap(), "ios");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_build_headers_rejects_invalid_name() {
        let headers = HashMap::from([("bad header".to_string(), "v".to_string())]);
        let result = build_headers(Some(&headers));
        assert!(matches!(result, Err(ApiError::InvalidHeader(name)) if name == "bad header"));
    }

    #[test]
    fn test_build_headers_rejects_invalid_value() {
        let headers = HashMap::from([("X-Trace".to_string(), "line\nbreak".to_string())]);
        let result = build_headers(Some(&headers));
        assert!(matches!(result, Err(ApiError::InvalidHeader(name)) if name == "X-Trace"));
    }

    #[test]
    fn test_build_headers_case_duplicates_are_deterministic() {
        let headers = HashMap::from([
            ("Content-Type".to_string(), "text/plain".to_string()),
            ("content-type".to_string(), "application/vnd.api+json".to_string()),
        ]);
        for _ in 0..10 {
            let map = build_headers(Some(&headers)).expect("headers");
            assert_eq!(map.get(header::CONTENT_TYPE).unwrap(), "application/vnd.api+json");
            assert_eq!(map.len(), 1);
        }
    }

    #[tokio::test]
    async fn test_post_json_invalid_url() {
        let client = ApiClient::new().expect("client");
        let result: Result<serde_json::Value, _> = client
            .post_json("not a url", None, &serde_json::json!({ "refresh": "r" }))
            .await;
        assert!(matches!(result, Err(ApiError::InvalidUrl { url, .. }) if url == "not a url"));
    }
}
