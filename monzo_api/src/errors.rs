//! Error types for the API client.

use serde_json::Value;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The API answered with a non-success status.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The exchange never completed (connection, DNS, TLS, or body read failure).
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// A success response carried a body that is not the expected JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// A request body could not be serialized to JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    /// The request path could not be resolved against the base URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The access token cannot be sent as an HTTP header value.
    #[error("Access token contains characters not allowed in an HTTP header")]
    InvalidToken,
}

impl Error {
    /// Returns the structured API error if the remote service rejected the request.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// A non-2xx response from the Monzo API.
///
/// `error_code` is the short token from the body's `error` field, or
/// `"unknown"` when the body did not carry one.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Monzo API error ({status}): {error_code} - {message}")]
pub struct ApiError {
    pub status: u16,
    pub error_code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(status: u16, error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            error_code: error_code.into(),
            message: message.into(),
        }
    }

    /// Classifies an error response body.
    ///
    /// JSON bodies use `error` for the code and `message` or
    /// `error_description` for the text, falling back to `HTTP <status>`.
    /// Bodies that are not JSON at all get `HTTP <status> error`.
    pub fn from_body(status: u16, body: &str) -> Self {
        let parsed = match serde_json::from_str::<Value>(body) {
            Ok(v) => v,
            Err(_) => return Self::new(status, "unknown", format!("HTTP {} error", status)),
        };

        let code = field_text(&parsed, "error").unwrap_or_else(|| "unknown".to_string());
        let message = field_text(&parsed, "message")
            .or_else(|| field_text(&parsed, "error_description"))
            .unwrap_or_else(|| format!("HTTP {}", status));
        Self::new(status, code, message)
    }
}

/// Reads an object field as text. Missing and `null` fields are absent;
/// non-string values are rendered as JSON.
fn field_text(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
