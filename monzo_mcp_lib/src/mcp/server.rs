//! MCP stdio server
//!
//! Reads newline-delimited JSON-RPC requests, handles each on its own task,
//! and funnels responses through a single writer so lines never interleave.

use std::io;
use std::sync::Arc;

use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use super::types::{
    JsonRpcRequest, JsonRpcResponse, ToolCallParams, INTERNAL_ERROR, INVALID_PARAMS,
    INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR,
};
use crate::tools::Toolbox;

pub const SERVER_NAME: &str = "monzo-api";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
const PROTOCOL_VERSION: &str = "2024-11-05";

/// Answers MCP requests using a [`Toolbox`].
pub struct McpServer {
    toolbox: Toolbox,
}

impl McpServer {
    pub fn new(toolbox: Toolbox) -> Self {
        Self { toolbox }
    }

    /// Handles one raw line. Returns `None` for notifications.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let message: Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("Unparsable JSON-RPC message: {}", e);
                return Some(JsonRpcResponse::error(Value::Null, PARSE_ERROR, e.to_string()));
            }
        };
        let id = message.get("id").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<JsonRpcRequest>(message) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => {
                tracing::warn!("Malformed JSON-RPC request: {}", e);
                Some(JsonRpcResponse::error(id, INVALID_REQUEST, e.to_string()))
            }
        }
    }

    pub async fn handle_request(&self, req: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let Some(id) = req.id.filter(|id| !id.is_null()) else {
            tracing::debug!("Notification received: {}", req.method);
            return None;
        };

        let response = match req.method.as_str() {
            "initialize" => JsonRpcResponse::success(id, initialize_result()),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tools_call(id, req.params).await,
            _ => JsonRpcResponse::error(
                id,
                METHOD_NOT_FOUND,
                format!("Unknown method: {}", req.method),
            ),
        };
        Some(response)
    }

    fn handle_tools_list(&self, id: Value) -> JsonRpcResponse {
        let tools: Vec<_> = self.toolbox.definitions().collect();
        JsonRpcResponse::success(id, json!({ "tools": tools }))
    }

    async fn handle_tools_call(&self, id: Value, params: Value) -> JsonRpcResponse {
        let call: ToolCallParams = match serde_json::from_value(params) {
            Ok(p) => p,
            Err(e) => return JsonRpcResponse::error(id, INVALID_PARAMS, e.to_string()),
        };

        let result = self.toolbox.call(&call.name, &call.arguments).await;
        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => JsonRpcResponse::error(id, INTERNAL_ERROR, e.to_string()),
        }
    }
}

fn initialize_result() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION
        }
    })
}

/// Serves requests from `reader` until EOF, writing responses to `writer`.
///
/// Lines are decoded lossily, so a line with invalid UTF-8 gets a parse error
/// response instead of ending the session. In-flight calls are drained before
/// returning, also when reading fails.
pub async fn serve<R, W>(server: Arc<McpServer>, reader: R, writer: W) -> io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel::<JsonRpcResponse>();
    let writer_task = tokio::spawn(write_responses(rx, writer));

    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut in_flight = JoinSet::new();

    let read_result = loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break Ok(()),
            Ok(_) => {}
            Err(e) => {
                tracing::error!("Failed to read from stdin: {}", e);
                break Err(e);
            }
        }

        let line = String::from_utf8_lossy(&buf).into_owned();
        if line.trim().is_empty() {
            continue;
        }
        let server = Arc::clone(&server);
        let tx = tx.clone();
        in_flight.spawn(async move {
            if let Some(response) = server.handle_line(&line).await {
                // The writer only stops early on an I/O error, which serve reports.
                let _ = tx.send(response);
            }
        });
        while in_flight.try_join_next().is_some() {}
    };

    tracing::info!("stdin closed, waiting for {} in-flight call(s)", in_flight.len());
    while in_flight.join_next().await.is_some() {}
    drop(tx);

    let write_result = writer_task.await.map_err(io::Error::other)?;
    read_result.and(write_result)
}

async fn write_responses<W>(mut rx: mpsc::UnboundedReceiver<JsonRpcResponse>, mut writer: W) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        let mut line = serde_json::to_vec(&response)?;
        line.push(b'\n');
        writer.write_all(&line).await?;
        writer.flush().await?;
    }
    Ok(())
}
