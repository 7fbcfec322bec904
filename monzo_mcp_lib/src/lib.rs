//! Library layer for the Monzo MCP server: the tool catalogue, argument
//! validation, result envelopes, and the stdio JSON-RPC loop.
//!
//! HTTP plumbing lives in the `monzo_api` crate; every tool here makes exactly
//! one call through its [`monzo_api::Client`].

pub mod error;
pub mod logging;
pub mod mcp;
pub mod response;
pub mod tools;
pub mod validation;

pub use monzo_api;

pub use error::ToolError;
pub use mcp::{serve, McpServer};
pub use response::ToolResult;
pub use tools::{ToolDefinition, Toolbox};
