use monzo_api::{Client, Params};
use serde::Serialize;
use serde_json::{json, Value};

use super::ToolDefinition;
use crate::error::ToolError;
use crate::logging::log_tool_call;
use crate::validation::Arguments;

pub(super) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "monzo_create_receipt",
            title: "Create/Update Receipt",
            description: "Create or update a receipt on a Monzo transaction. Provide the transaction ID and receipt items as a JSON structure.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "transaction_id": {
                        "type": "string",
                        "description": "The transaction ID to attach the receipt to"
                    },
                    "items": {
                        "type": "string",
                        "description": "JSON array of receipt items, each with: description (string), amount (integer in pence), currency (string, e.g. 'GBP'), quantity (number). Example: [{\"description\":\"Coffee\",\"amount\":350,\"currency\":\"GBP\",\"quantity\":1}]"
                    },
                    "tax": {
                        "type": "integer",
                        "description": "Total tax amount in pence"
                    }
                },
                "required": ["transaction_id", "items"]
            }),
        },
        ToolDefinition {
            name: "monzo_get_receipt",
            title: "Get Receipt",
            description: "Retrieve a receipt attached to a Monzo transaction.",
            input_schema: external_id_schema(
                "The external ID (typically the transaction ID) of the receipt",
            ),
        },
        ToolDefinition {
            name: "monzo_delete_receipt",
            title: "Delete Receipt",
            description: "Delete a receipt from a Monzo transaction.",
            input_schema: external_id_schema(
                "The external ID (typically the transaction ID) of the receipt to delete",
            ),
        },
    ]
}

fn external_id_schema(description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "external_id": { "type": "string", "description": description }
        },
        "required": ["external_id"]
    })
}

/// Receipt payload. The transaction ID doubles as the receipt's external ID.
#[derive(Debug, Serialize)]
struct ReceiptBody<'a> {
    transaction_id: &'a str,
    external_id: &'a str,
    items: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    tax: Option<i64>,
}

/// Parses the `items` argument, which carries a JSON array as text.
fn parse_items(items: &str) -> Result<Value, ToolError> {
    let parsed: Value = serde_json::from_str(items)
        .map_err(|e| ToolError::InvalidInput(format!("items is not valid JSON: {}", e)))?;
    if !parsed.is_array() {
        return Err(ToolError::InvalidInput(
            "items must be a JSON array".to_string(),
        ));
    }
    Ok(parsed)
}

pub(super) async fn create_receipt(
    client: &Client,
    args: Arguments<'_>,
) -> Result<Value, ToolError> {
    let transaction_id = args.required_str("transaction_id")?;
    let items = args.required_str("items")?;
    let tax = args.optional_int("tax")?;
    log_tool_call(
        "monzo_create_receipt",
        &[("transaction_id", json!(transaction_id))],
    );

    let body = ReceiptBody {
        transaction_id,
        external_id: transaction_id,
        items: parse_items(items)?,
        tax,
    };
    Ok(client.put_json("/transaction-receipts", &body).await?)
}

pub(super) async fn get_receipt(client: &Client, args: Arguments<'_>) -> Result<Value, ToolError> {
    let external_id = args.required_str("external_id")?;
    log_tool_call("monzo_get_receipt", &[("external_id", json!(external_id))]);

    let query = Params::new().with("external_id", external_id);
    Ok(client.get("/transaction-receipts", Some(&query)).await?)
}

pub(super) async fn delete_receipt(
    client: &Client,
    args: Arguments<'_>,
) -> Result<Value, ToolError> {
    let external_id = args.required_str("external_id")?;
    log_tool_call("monzo_delete_receipt", &[("external_id", json!(external_id))]);

    let query = Params::new().with("external_id", external_id);
    Ok(client.delete("/transaction-receipts", Some(&query)).await?)
}
