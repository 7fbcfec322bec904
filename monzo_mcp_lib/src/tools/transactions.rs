use monzo_api::{Client, Params};
use serde_json::{json, Value};

use super::{segment, ToolDefinition};
use crate::error::ToolError;
use crate::logging::log_tool_call;
use crate::validation::Arguments;

pub(super) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "monzo_list_transactions",
            title: "List Transactions",
            description: "List transactions for a Monzo account. Returns transaction amounts, merchants, categories, and metadata. Note: transaction history is limited to 90 days for API access.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "account_id": {
                        "type": "string",
                        "description": "The account ID to list transactions for"
                    },
                    "since": {
                        "type": "string",
                        "description": "RFC 3339 timestamp or object ID to filter transactions after (e.g. '2024-01-01T00:00:00Z')"
                    },
                    "before": {
                        "type": "string",
                        "description": "RFC 3339 timestamp to filter transactions before"
                    },
                    "limit": {
                        "type": "integer",
                        "minimum": 1,
                        "maximum": 100,
                        "description": "Number of results per page (default 30, max 100)"
                    }
                },
                "required": ["account_id"]
            }),
        },
        ToolDefinition {
            name: "monzo_get_transaction",
            title: "Get Transaction",
            description: "Retrieve details of a single Monzo transaction by its ID. Optionally expand merchant details.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "transaction_id": {
                        "type": "string",
                        "description": "The transaction ID to look up"
                    },
                    "expand_merchant": {
                        "type": "boolean",
                        "description": "Set to true to include full merchant details"
                    }
                },
                "required": ["transaction_id"]
            }),
        },
        ToolDefinition {
            name: "monzo_annotate_transaction",
            title: "Annotate Transaction",
            description: "Add custom metadata/annotations to a Monzo transaction. You can store key-value pairs on the transaction.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "transaction_id": {
                        "type": "string",
                        "description": "The transaction ID to annotate"
                    },
                    "key": {
                        "type": "string",
                        "description": "The metadata key (will be stored as metadata[key])"
                    },
                    "value": {
                        "type": "string",
                        "description": "The metadata value. Set to empty string to delete the key."
                    }
                },
                "required": ["transaction_id", "key", "value"]
            }),
        },
    ]
}

pub(super) async fn list_transactions(
    client: &Client,
    args: Arguments<'_>,
) -> Result<Value, ToolError> {
    let account_id = args.required_str("account_id")?;
    let since = args.optional_str("since")?;
    let before = args.optional_str("before")?;
    let limit = args.optional_int("limit")?;
    log_tool_call(
        "monzo_list_transactions",
        &[
            ("account_id", json!(account_id)),
            ("since", json!(since)),
            ("before", json!(before)),
            ("limit", json!(limit)),
        ],
    );

    let query = Params::new()
        .with("account_id", account_id)
        .with_opt("since", since)
        .with_opt("before", before)
        .with_opt("limit", limit);
    Ok(client.get("/transactions", Some(&query)).await?)
}

pub(super) async fn get_transaction(
    client: &Client,
    args: Arguments<'_>,
) -> Result<Value, ToolError> {
    let transaction_id = args.required_str("transaction_id")?;
    let expand_merchant = args.optional_bool("expand_merchant")?.unwrap_or(false);
    log_tool_call(
        "monzo_get_transaction",
        &[("transaction_id", json!(transaction_id))],
    );

    let path = format!("/transactions/{}", segment("transaction_id", transaction_id)?);
    let query = Params::new().with_opt("expand[]", expand_merchant.then_some("merchant"));
    Ok(client.get(&path, Some(&query)).await?)
}

pub(super) async fn annotate(client: &Client, args: Arguments<'_>) -> Result<Value, ToolError> {
    let transaction_id = args.required_str("transaction_id")?;
    let key = args.required_str("key")?;
    let value = args.required_str("value")?;
    log_tool_call(
        "monzo_annotate_transaction",
        &[("transaction_id", json!(transaction_id)), ("key", json!(key))],
    );

    let path = format!("/transactions/{}", segment("transaction_id", transaction_id)?);
    let body = Params::new().with(format!("metadata[{}]", key), value);
    Ok(client.patch_form(&path, body).await?)
}
