use monzo_api::{Client, Params};
use serde_json::{json, Value};

use super::ToolDefinition;
use crate::error::ToolError;
use crate::logging::log_tool_call;
use crate::validation::Arguments;

pub(super) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "monzo_whoami",
            title: "Who Am I",
            description: "Verify the authenticated Monzo user. Returns user ID, authentication type, and client ID.",
            input_schema: json!({ "type": "object", "properties": {} }),
        },
        ToolDefinition {
            name: "monzo_list_accounts",
            title: "List Accounts",
            description: "List the authenticated user's Monzo accounts. Returns account IDs, types, and descriptions.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "account_type": {
                        "type": "string",
                        "description": "Filter by account type (e.g. 'uk_retail', 'uk_retail_joint')"
                    }
                }
            }),
        },
        ToolDefinition {
            name: "monzo_get_balance",
            title: "Get Balance",
            description: "Fetch the balance of a Monzo account. Returns balance, total balance, currency, and spend today (all in minor units / pence).",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "account_id": {
                        "type": "string",
                        "description": "The account ID to get the balance for"
                    }
                },
                "required": ["account_id"]
            }),
        },
    ]
}

pub(super) async fn whoami(client: &Client) -> Result<Value, ToolError> {
    log_tool_call("monzo_whoami", &[]);
    Ok(client.get("/ping/whoami", None).await?)
}

pub(super) async fn list_accounts(client: &Client, args: Arguments<'_>) -> Result<Value, ToolError> {
    let account_type = args.optional_str("account_type")?;
    log_tool_call("monzo_list_accounts", &[("account_type", json!(account_type))]);

    let query = Params::new().with_opt("account_type", account_type);
    Ok(client.get("/accounts", Some(&query)).await?)
}

pub(super) async fn get_balance(client: &Client, args: Arguments<'_>) -> Result<Value, ToolError> {
    let account_id = args.required_str("account_id")?;
    log_tool_call("monzo_get_balance", &[("account_id", json!(account_id))]);

    let query = Params::new().with("account_id", account_id);
    Ok(client.get("/balance", Some(&query)).await?)
}
