use monzo_api::{Client, Params};
use serde_json::{json, Value};

use super::ToolDefinition;
use crate::error::ToolError;
use crate::logging::log_tool_call;
use crate::validation::Arguments;

pub(super) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "monzo_upload_attachment",
            title: "Upload Attachment",
            description: "Get a pre-signed upload URL for attaching an image to a Monzo transaction. Returns the upload URL and file URL to use with monzo_register_attachment.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "file_name": {
                        "type": "string",
                        "description": "The name of the file (e.g. 'receipt.png')"
                    },
                    "file_type": {
                        "type": "string",
                        "description": "The MIME type of the file (e.g. 'image/png', 'image/jpeg')"
                    },
                    "content_length": {
                        "type": "integer",
                        "minimum": 1,
                        "description": "The file size in bytes"
                    }
                },
                "required": ["file_name", "file_type", "content_length"]
            }),
        },
        ToolDefinition {
            name: "monzo_register_attachment",
            title: "Register Attachment",
            description: "Register an uploaded image as an attachment on a Monzo transaction. The image must already be uploaded to the URL from monzo_upload_attachment.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "external_id": {
                        "type": "string",
                        "description": "The transaction ID to attach the image to"
                    },
                    "file_url": {
                        "type": "string",
                        "description": "The file_url returned from monzo_upload_attachment"
                    },
                    "file_type": {
                        "type": "string",
                        "description": "The MIME type of the file (e.g. 'image/png')"
                    }
                },
                "required": ["external_id", "file_url", "file_type"]
            }),
        },
        ToolDefinition {
            name: "monzo_deregister_attachment",
            title: "Deregister Attachment",
            description: "Remove an attachment from a Monzo transaction.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "id": {
                        "type": "string",
                        "description": "The attachment ID to remove"
                    }
                },
                "required": ["id"]
            }),
        },
    ]
}

pub(super) async fn upload(client: &Client, args: Arguments<'_>) -> Result<Value, ToolError> {
    let file_name = args.required_str("file_name")?;
    let file_type = args.required_str("file_type")?;
    let content_length = args.positive_int("content_length")?;
    log_tool_call(
        "monzo_upload_attachment",
        &[("file_name", json!(file_name)), ("file_type", json!(file_type))],
    );

    let body = Params::new()
        .with("file_name", file_name)
        .with("file_type", file_type)
        .with("content_length", content_length);
    Ok(client.post_form("/attachment/upload", body).await?)
}

pub(super) async fn register(client: &Client, args: Arguments<'_>) -> Result<Value, ToolError> {
    let external_id = args.required_str("external_id")?;
    let file_url = args.required_str("file_url")?;
    let file_type = args.required_str("file_type")?;
    log_tool_call(
        "monzo_register_attachment",
        &[("external_id", json!(external_id))],
    );

    let body = Params::new()
        .with("external_id", external_id)
        .with("file_url", file_url)
        .with("file_type", file_type);
    Ok(client.post_form("/attachment/register", body).await?)
}

pub(super) async fn deregister(client: &Client, args: Arguments<'_>) -> Result<Value, ToolError> {
    let id = args.required_str("id")?;
    log_tool_call("monzo_deregister_attachment", &[("id", json!(id))]);

    let body = Params::new().with("id", id);
    Ok(client.post_form("/attachment/deregister", body).await?)
}
