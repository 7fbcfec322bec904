//! Error types for the tool layer.

use std::fmt;
use std::time::Duration;

/// Errors produced while running a tool, wrapping upstream API errors and
/// adding argument validation, timeout, and lookup failures.
#[derive(Debug)]
pub enum ToolError {
    /// An error from the underlying API client.
    Api(monzo_api::Error),
    /// Tool arguments failed schema validation or could not be interpreted.
    InvalidInput(String),
    /// The call did not finish within the configured request timeout.
    Timeout(Duration),
    /// No tool is registered under this name.
    UnknownTool(String),
    /// A tool's input schema failed to compile.
    InvalidSchema { tool: &'static str, reason: String },
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "{}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::Timeout(d) => write!(f, "Request timed out after {}s", d.as_secs_f64()),
            Self::UnknownTool(name) => write!(f, "Unknown tool: {}", name),
            Self::InvalidSchema { tool, reason } => {
                write!(f, "Invalid input schema for {}: {}", tool, reason)
            }
        }
    }
}

impl std::error::Error for ToolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<monzo_api::Error> for ToolError {
    fn from(e: monzo_api::Error) -> Self {
        Self::Api(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monzo_api::ApiError;

    #[test]
    fn api_error_text_is_passed_through() {
        let err = ToolError::from(monzo_api::Error::from(ApiError::new(
            403,
            "forbidden",
            "Not allowed",
        )));
        assert_eq!(err.to_string(), "Monzo API error (403): forbidden - Not allowed");
    }

    #[test]
    fn timeout_text() {
        let err = ToolError::Timeout(Duration::from_secs(30));
        assert_eq!(err.to_string(), "Request timed out after 30s");
    }

    #[test]
    fn invalid_input_text() {
        let err = ToolError::InvalidInput("items must be a JSON array".into());
        assert_eq!(err.to_string(), "Invalid input: items must be a JSON array");
    }
}
