//! The Monzo tool catalogue and call dispatch.
//!
//! Every handler follows the same shape: log the call, build parameters,
//! make exactly one API client call, and hand the decoded payload back.

mod accounts;
mod attachments;
mod feed;
mod pots;
mod receipts;
mod transactions;
mod webhooks;

use std::borrow::Cow;
use std::time::Duration;

use jsonschema::Validator;
use monzo_api::Client;
use serde::Serialize;
use serde_json::Value;

use crate::error::ToolError;
use crate::response::ToolResult;
use crate::validation::{compile_schema, validate_arguments, Arguments};

/// Tool definition returned by tools/list
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// All tool definitions, in registration order.
pub fn definitions() -> Vec<ToolDefinition> {
    let mut defs = Vec::new();
    defs.extend(accounts::definitions());
    defs.extend(pots::definitions());
    defs.extend(transactions::definitions());
    defs.extend(feed::definitions());
    defs.extend(attachments::definitions());
    defs.extend(receipts::definitions());
    defs.extend(webhooks::definitions());
    defs
}

struct RegisteredTool {
    definition: ToolDefinition,
    validator: Validator,
}

/// The registered tools bound to one API client.
///
/// Calls share nothing but the client, so a `Toolbox` can serve any number
/// of calls at once.
pub struct Toolbox {
    client: Client,
    tools: Vec<RegisteredTool>,
    timeout: Option<Duration>,
}

impl Toolbox {
    /// Registers every tool, compiling its input schema.
    pub fn new(client: Client) -> Result<Self, ToolError> {
        let tools = definitions()
            .into_iter()
            .map(|definition| {
                let validator = compile_schema(definition.name, &definition.input_schema)?;
                Ok(RegisteredTool {
                    definition,
                    validator,
                })
            })
            .collect::<Result<Vec<_>, ToolError>>()?;
        Ok(Self {
            client,
            tools,
            timeout: None,
        })
    }

    /// Bounds each API call. `None` waits indefinitely.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn definitions(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.iter().map(|t| &t.definition)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Runs a tool and converts the outcome into a result envelope.
    pub async fn call(&self, name: &str, args: &Value) -> ToolResult {
        ToolResult::from_outcome(self.try_call(name, args).await)
    }

    async fn try_call(&self, name: &str, args: &Value) -> Result<Value, ToolError> {
        let tool = self
            .tools
            .iter()
            .find(|t| t.definition.name == name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        let args = validate_arguments(&tool.validator, args)?;

        let call = dispatch(&self.client, tool.definition.name, args);
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| ToolError::Timeout(limit))?,
            None => call.await,
        }
    }
}

async fn dispatch(client: &Client, name: &str, args: Arguments<'_>) -> Result<Value, ToolError> {
    match name {
        "monzo_whoami" => accounts::whoami(client).await,
        "monzo_list_accounts" => accounts::list_accounts(client, args).await,
        "monzo_get_balance" => accounts::get_balance(client, args).await,
        "monzo_list_pots" => pots::list_pots(client, args).await,
        "monzo_deposit_into_pot" => pots::deposit(client, args).await,
        "monzo_withdraw_from_pot" => pots::withdraw(client, args).await,
        "monzo_list_transactions" => transactions::list_transactions(client, args).await,
        "monzo_get_transaction" => transactions::get_transaction(client, args).await,
        "monzo_annotate_transaction" => transactions::annotate(client, args).await,
        "monzo_create_feed_item" => feed::create_feed_item(client, args).await,
        "monzo_upload_attachment" => attachments::upload(client, args).await,
        "monzo_register_attachment" => attachments::register(client, args).await,
        "monzo_deregister_attachment" => attachments::deregister(client, args).await,
        "monzo_create_receipt" => receipts::create_receipt(client, args).await,
        "monzo_get_receipt" => receipts::get_receipt(client, args).await,
        "monzo_delete_receipt" => receipts::delete_receipt(client, args).await,
        "monzo_register_webhook" => webhooks::register(client, args).await,
        "monzo_list_webhooks" => webhooks::list(client, args).await,
        "monzo_delete_webhook" => webhooks::delete(client, args).await,
        _ => Err(ToolError::UnknownTool(name.to_string())),
    }
}

/// Percent-encodes an identifier so it stays a single path segment.
///
/// Dot segments are rejected outright since URL resolution collapses them
/// even when escaped.
fn segment<'a>(key: &str, id: &'a str) -> Result<Cow<'a, str>, ToolError> {
    if id.is_empty() || id == "." || id == ".." {
        return Err(ToolError::InvalidInput(format!(
            "{} is not a valid identifier: {:?}",
            key, id
        )));
    }
    Ok(urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tool_names_are_unique_and_prefixed() {
        let defs = definitions();
        let names: HashSet<&str> = defs.iter().map(|d| d.name).collect();
        assert_eq!(names.len(), defs.len());
        assert!(defs.iter().all(|d| d.name.starts_with("monzo_")));
    }

    #[test]
    fn catalogue_has_every_tool() {
        assert_eq!(definitions().len(), 19);
    }

    #[test]
    fn every_schema_is_an_object_schema() {
        for def in definitions() {
            assert_eq!(def.input_schema["type"], "object", "{}", def.name);
            assert!(def.input_schema["properties"].is_object(), "{}", def.name);
            assert!(compile_schema(def.name, &def.input_schema).is_ok(), "{}", def.name);
        }
    }

    #[test]
    fn segment_escapes_path_separators() {
        assert_eq!(segment("pot_id", "pot_123").unwrap(), "pot_123");
        assert_eq!(segment("pot_id", "../accounts").unwrap(), "..%2Faccounts");
        assert_eq!(segment("pot_id", "a b?c").unwrap(), "a%20b%3Fc");
    }

    #[test]
    fn segment_rejects_dot_segments() {
        assert!(segment("pot_id", "..").is_err());
        assert!(segment("pot_id", ".").is_err());
        assert!(segment("pot_id", "").is_err());
    }

    #[test]
    fn definition_serializes_input_schema_key() {
        let def = definitions().remove(0);
        let value = serde_json::to_value(&def).unwrap();
        assert!(value.get("inputSchema").is_some());
        assert_eq!(value["name"], "monzo_whoami");
        assert_eq!(value["title"], "Who Am I");
    }
}
