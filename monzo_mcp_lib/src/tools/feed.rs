use monzo_api::{Client, Params};
use serde_json::{json, Value};

use super::ToolDefinition;
use crate::error::ToolError;
use crate::logging::log_tool_call;
use crate::validation::Arguments;

pub(super) fn definitions() -> Vec<ToolDefinition> {
    vec![ToolDefinition {
        name: "monzo_create_feed_item",
        title: "Create Feed Item",
        description: "Create a feed item in the Monzo app for a given account. The item appears in the user's transaction feed with a title, body, and optional image.",
        input_schema: json!({
            "type": "object",
            "properties": {
                "account_id": {
                    "type": "string",
                    "description": "The account ID to create the feed item for"
                },
                "title": {
                    "type": "string",
                    "description": "The title of the feed item"
                },
                "body": {
                    "type": "string",
                    "description": "The body text of the feed item"
                },
                "image_url": {
                    "type": "string",
                    "description": "URL of an image to display with the feed item"
                },
                "url": {
                    "type": "string",
                    "description": "URL to open when the feed item is tapped"
                }
            },
            "required": ["account_id", "title", "body"]
        }),
    }]
}

pub(super) async fn create_feed_item(
    client: &Client,
    args: Arguments<'_>,
) -> Result<Value, ToolError> {
    let account_id = args.required_str("account_id")?;
    let title = args.required_str("title")?;
    let body_text = args.required_str("body")?;
    // Empty strings are dropped along with absent values.
    let image_url = args.optional_str("image_url")?.filter(|s| !s.is_empty());
    let url = args.optional_str("url")?.filter(|s| !s.is_empty());
    log_tool_call(
        "monzo_create_feed_item",
        &[("account_id", json!(account_id)), ("title", json!(title))],
    );

    let body = Params::new()
        .with("account_id", account_id)
        .with("type", "basic")
        .with("params[title]", title)
        .with("params[body]", body_text)
        .with_opt("params[image_url]", image_url)
        .with_opt("url", url);
    Ok(client.post_form("/feed", body).await?)
}
