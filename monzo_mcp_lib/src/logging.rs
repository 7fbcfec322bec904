//! Structured log line emitted for every tool invocation.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

/// Strings longer than this are shortened before logging.
pub const MAX_LOGGED_STRING: usize = 100;
/// Number of characters kept from a shortened string.
pub const TRUNCATED_PREFIX: usize = 20;

/// Builds the log record for a tool call: timestamp, tool name, and the
/// selected parameters. `null` parameters are left out.
pub fn tool_call_record(tool: &str, params: &[(&str, Value)], now: DateTime<Utc>) -> Value {
    let mut record = Map::new();
    record.insert(
        "ts".to_string(),
        Value::String(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    record.insert("tool".to_string(), Value::String(tool.to_string()));
    for (key, value) in params {
        if value.is_null() {
            continue;
        }
        record.insert(key.to_string(), truncate_value(value));
    }
    Value::Object(record)
}

fn truncate_value(value: &Value) -> Value {
    match value {
        Value::String(s) if s.chars().count() > MAX_LOGGED_STRING => {
            let prefix: String = s.chars().take(TRUNCATED_PREFIX).collect();
            Value::String(format!("{}...", prefix))
        }
        other => other.clone(),
    }
}

/// Emits the tool call record at `info` level.
pub fn log_tool_call(tool: &str, params: &[(&str, Value)]) {
    let record = tool_call_record(tool, params, Utc::now());
    tracing::info!(target: "monzo_mcp::tool_call", "{}", record);
}
