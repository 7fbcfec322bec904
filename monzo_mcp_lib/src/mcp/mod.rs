//! Model Context Protocol server over newline-delimited JSON-RPC.

mod server;
mod types;

pub use server::{serve, McpServer, SERVER_NAME};
pub use types::*;
