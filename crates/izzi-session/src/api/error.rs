use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },

    #[error("Failed to decode response: {source} (body: {body})")]
    Decoding {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("Response did not contain an access token")]
    MissingToken,
}

/// Maximum length for response bodies carried in errors
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    pub(crate) fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        ApiError::HttpStatus {
            code: status.as_u16(),
            body: Self::truncate_body(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_body_short() {
        assert_eq!(ApiError::truncate_body("not found"), "not found");
    }

    #[test]
    fn test_truncate_body_long() {
        let body = "x".repeat(600);
        let truncated = ApiError::truncate_body(&body);
        assert!(truncated.starts_with(&"x".repeat(500)));
        assert!(truncated.ends_with("(truncated, 600 total bytes)"));
    }

    #[test]
    fn test_truncate_body_respects_char_boundary() {
        // 499 ASCII bytes followed by a two-byte char straddling the limit
        let body = format!("{}é{}", "a".repeat(499), "b".repeat(100));
        let truncated = ApiError::truncate_body(&body);
        assert!(truncated.starts_with(&"a".repeat(499)));
        assert!(!truncated.contains('é'));
    }

    #[test]
    fn test_from_status() {
        let err = ApiError::from_status(reqwest::StatusCode::NOT_FOUND, "missing");
        assert!(matches!(err, ApiError::HttpStatus { code: 404, ref body } if body == "missing"));
        assert_eq!(err.to_string(), "HTTP status 404: missing");
    }
}
