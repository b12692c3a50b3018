//! Errors that can occur when talking to the Anvaya backend.
//!
//! Three failure families per the client's error taxonomy: transport
//! failures, non-success HTTP statuses with a structured error payload, and
//! malformed payload shapes. All are caught at the originating request and
//! surfaced as screen-local error state; none propagates into rendering.

use serde::Deserialize;
use thiserror::Error;

/// Errors from the Anvaya REST API boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status with the backend's error message, when it sent one.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Response body did not match the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Request requires a token the session does not hold.
    #[error("Not authenticated: {0}")]
    Auth(String),
}

impl ApiError {
    /// Build an `Api` error from a status code and raw response body.
    ///
    /// The backend wraps messages as `{"error": "..."}`; fall back to the
    /// raw body when the payload is not structured.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorPayload>(body)
            .ok()
            .and_then(|payload| payload.message())
            .unwrap_or_else(|| body.chars().take(200).collect());
        Self::Api { status, message }
    }
}

/// Structured error payload from the backend.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorPayload {
    fn message(self) -> Option<String> {
        self.error.or(self.message)
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_error_payload_is_extracted() {
        let err = ApiError::from_response(400, r#"{"error": "Lead name is required"}"#);
        assert_eq!(err.to_string(), "API error: 400 - Lead name is required");
    }

    #[test]
    fn test_message_field_is_accepted_too() {
        let err = ApiError::from_response(401, r#"{"message": "Invalid credentials"}"#);
        assert_eq!(err.to_string(), "API error: 401 - Invalid credentials");
    }

    #[test]
    fn test_unstructured_body_falls_back_to_raw_text() {
        let err = ApiError::from_response(502, "Bad Gateway");
        assert_eq!(err.to_string(), "API error: 502 - Bad Gateway");
    }

    #[test]
    fn test_long_unstructured_body_is_truncated() {
        let body = "x".repeat(500);
        let ApiError::Api { message, .. } = ApiError::from_response(500, &body) else {
            panic!("expected Api variant");
        };
        assert_eq!(message.len(), 200);
    }

    #[test]
    fn test_not_found_display() {
        let err = ApiError::NotFound("lead 64b1f9ab12cd34ef56ab78cd".to_string());
        assert_eq!(err.to_string(), "Not found: lead 64b1f9ab12cd34ef56ab78cd");
    }
}
