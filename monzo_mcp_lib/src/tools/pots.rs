use monzo_api::{Client, Params};
use serde_json::{json, Value};

use super::{segment, ToolDefinition};
use crate::error::ToolError;
use crate::logging::log_tool_call;
use crate::validation::Arguments;

pub(super) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "monzo_list_pots",
            title: "List Pots",
            description: "List all pots for a Monzo account. Returns pot IDs, names, balances, and styles.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "current_account_id": {
                        "type": "string",
                        "description": "The account ID to list pots for"
                    }
                },
                "required": ["current_account_id"]
            }),
        },
        ToolDefinition {
            name: "monzo_deposit_into_pot",
            title: "Deposit Into Pot",
            description: "Move money from a Monzo account into a pot. Amount is in pence (e.g. 1000 = £10.00). Requires a unique dedupe_id to prevent duplicate deposits.",
            input_schema: transfer_schema(
                "The pot ID to deposit into",
                "source_account_id",
                "The account ID to move money from",
                "Amount in pence to deposit (e.g. 1000 = £10.00)",
                "Unique string to prevent duplicate deposits",
            ),
        },
        ToolDefinition {
            name: "monzo_withdraw_from_pot",
            title: "Withdraw From Pot",
            description: "Move money from a pot back into a Monzo account. Amount is in pence (e.g. 1000 = £10.00). Requires a unique dedupe_id. Pots with added security cannot be withdrawn via API.",
            input_schema: transfer_schema(
                "The pot ID to withdraw from",
                "destination_account_id",
                "The account ID to move money to",
                "Amount in pence to withdraw (e.g. 1000 = £10.00)",
                "Unique string to prevent duplicate withdrawals",
            ),
        },
    ]
}

/// Deposits and withdrawals share a shape and differ in the account field.
fn transfer_schema(
    pot_desc: &str,
    account_field: &str,
    account_desc: &str,
    amount_desc: &str,
    dedupe_desc: &str,
) -> Value {
    json!({
        "type": "object",
        "properties": {
            "pot_id": { "type": "string", "description": pot_desc },
            account_field: { "type": "string", "description": account_desc },
            "amount": { "type": "integer", "minimum": 1, "description": amount_desc },
            "dedupe_id": { "type": "string", "description": dedupe_desc }
        },
        "required": ["pot_id", account_field, "amount", "dedupe_id"]
    })
}

pub(super) async fn list_pots(client: &Client, args: Arguments<'_>) -> Result<Value, ToolError> {
    let current_account_id = args.required_str("current_account_id")?;
    log_tool_call(
        "monzo_list_pots",
        &[("current_account_id", json!(current_account_id))],
    );

    let query = Params::new().with("current_account_id", current_account_id);
    Ok(client.get("/pots", Some(&query)).await?)
}

pub(super) async fn deposit(client: &Client, args: Arguments<'_>) -> Result<Value, ToolError> {
    transfer(client, args, "monzo_deposit_into_pot", "deposit", "source_account_id").await
}

pub(super) async fn withdraw(client: &Client, args: Arguments<'_>) -> Result<Value, ToolError> {
    transfer(
        client,
        args,
        "monzo_withdraw_from_pot",
        "withdraw",
        "destination_account_id",
    )
    .await
}

async fn transfer(
    client: &Client,
    args: Arguments<'_>,
    tool: &str,
    action: &str,
    account_field: &str,
) -> Result<Value, ToolError> {
    let pot_id = args.required_str("pot_id")?;
    let account_id = args.required_str(account_field)?;
    let amount = args.positive_int("amount")?;
    let dedupe_id = args.required_str("dedupe_id")?;
    log_tool_call(tool, &[("pot_id", json!(pot_id)), ("amount", json!(amount))]);

    let path = format!("/pots/{}/{}", segment("pot_id", pot_id)?, action);
    let body = Params::new()
        .with(account_field, account_id)
        .with("amount", amount)
        .with("dedupe_id", dedupe_id);
    Ok(client.put_form(&path, body).await?)
}
