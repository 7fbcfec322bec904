use monzo_api::{Client, Params};
use serde_json::{json, Value};

use super::{segment, ToolDefinition};
use crate::error::ToolError;
use crate::logging::log_tool_call;
use crate::validation::Arguments;

pub(super) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "monzo_register_webhook",
            title: "Register Webhook",
            description: "Register a webhook URL to receive real-time notifications for a Monzo account. Each time a transaction is created, Monzo will POST the transaction data to the URL.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "account_id": {
                        "type": "string",
                        "description": "The account ID to register the webhook for"
                    },
                    "url": {
                        "type": "string",
                        "description": "The URL that Monzo will POST transaction events to"
                    }
                },
                "required": ["account_id", "url"]
            }),
        },
        ToolDefinition {
            name: "monzo_list_webhooks",
            title: "List Webhooks",
            description: "List all registered webhooks for a Monzo account.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "account_id": {
                        "type": "string",
                        "description": "The account ID to list webhooks for"
                    }
                },
                "required": ["account_id"]
            }),
        },
        ToolDefinition {
            name: "monzo_delete_webhook",
            title: "Delete Webhook",
            description: "Delete a registered webhook by its ID.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "webhook_id": {
                        "type": "string",
                        "description": "The webhook ID to delete"
                    }
                },
                "required": ["webhook_id"]
            }),
        },
    ]
}

pub(super) async fn register(client: &Client, args: Arguments<'_>) -> Result<Value, ToolError> {
    let account_id = args.required_str("account_id")?;
    let url = args.required_str("url")?;
    log_tool_call(
        "monzo_register_webhook",
        &[("account_id", json!(account_id)), ("url", json!(url))],
    );

    let body = Params::new().with("account_id", account_id).with("url", url);
    Ok(client.post_form("/webhooks", body).await?)
}

pub(super) async fn list(client: &Client, args: Arguments<'_>) -> Result<Value, ToolError> {
    let account_id = args.required_str("account_id")?;
    log_tool_call("monzo_list_webhooks", &[("account_id", json!(account_id))]);

    let query = Params::new().with("account_id", account_id);
    Ok(client.get("/webhooks", Some(&query)).await?)
}

pub(super) async fn delete(client: &Client, args: Arguments<'_>) -> Result<Value, ToolError> {
    let webhook_id = args.required_str("webhook_id")?;
    log_tool_call("monzo_delete_webhook", &[("webhook_id", json!(webhook_id))]);

    let path = format!("/webhooks/{}", segment("webhook_id", webhook_id)?);
    Ok(client.delete(&path, None).await?)
}
