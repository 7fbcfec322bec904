//! Tool result envelopes returned from `tools/call`.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

/// Content block in a tool result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolResultContent {
    #[serde(rename = "type")]
    pub content_type: &'static str,
    pub text: String,
}

/// Result of a tool call: a single text block, flagged when it reports a failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolResult {
    pub content: Vec<ToolResultContent>,
    #[serde(rename = "isError", skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl ToolResult {
    fn text_block(text: String, is_error: bool) -> Self {
        Self {
            content: vec![ToolResultContent {
                content_type: "text",
                text,
            }],
            is_error,
        }
    }

    /// Wraps a payload as pretty-printed JSON (2-space indent).
    pub fn json(data: &Value) -> Self {
        match serde_json::to_string_pretty(data) {
            Ok(text) => Self::text_block(text, false),
            Err(e) => Self::error(e),
        }
    }

    /// Wraps a failure as `Error: <message>`.
    pub fn error(err: impl Display) -> Self {
        Self::text_block(format!("Error: {}", err), true)
    }

    pub fn from_outcome<E: Display>(outcome: Result<Value, E>) -> Self {
        match outcome {
            Ok(data) => Self::json(&data),
            Err(e) => Self::error(e),
        }
    }

    /// Text of the first content block.
    pub fn text(&self) -> &str {
        self.content.first().map(|c| c.text.as_str()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_wraps_data_in_one_text_block() {
        let result = ToolResult::json(&json!({"balance": 1000}));
        assert_eq!(result.content.len(), 1);
        assert_eq!(result.content[0].content_type, "text");
        assert!(!result.is_error);
        let parsed: Value = serde_json::from_str(result.text()).unwrap();
        assert_eq!(parsed, json!({"balance": 1000}));
    }

    #[test]
    fn json_uses_two_space_indent() {
        let result = ToolResult::json(&json!({"a": 1}));
        assert_eq!(result.text(), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn error_prefixes_message() {
        let result = ToolResult::error("Something went wrong");
        assert!(result.is_error);
        assert_eq!(result.text(), "Error: Something went wrong");
    }

    #[test]
    fn success_omits_is_error_flag() {
        let value = serde_json::to_value(ToolResult::json(&json!({}))).unwrap();
        assert_eq!(value, json!({"content": [{"type": "text", "text": "{}"}]}));
    }

    #[test]
    fn failure_serializes_is_error_flag() {
        let value = serde_json::to_value(ToolResult::error("boom")).unwrap();
        assert_eq!(value["isError"], json!(true));
        assert_eq!(value["content"][0]["text"], "Error: boom");
    }
}
