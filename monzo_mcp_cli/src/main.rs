mod config;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use monzo_mcp_lib::monzo_api::Client;
use monzo_mcp_lib::{serve, McpServer, Toolbox};

use crate::config::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries protocol traffic, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("monzo_mcp=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let Some(token) = cli.access_token() else {
        eprintln!("{}", config::missing_token_message());
        std::process::exit(1);
    };

    let client = Client::with_base_url(&cli.base_url, token)
        .with_context(|| format!("invalid Monzo API configuration for {}", cli.base_url))?;
    let toolbox = Toolbox::new(client)?.with_timeout(cli.request_timeout());
    tracing::debug!("Registered {} tools", toolbox.len());

    let server = Arc::new(McpServer::new(toolbox));
    tracing::info!("Monzo MCP server running on stdio");
    serve(server, tokio::io::stdin(), tokio::io::stdout()).await?;
    tracing::info!("Monzo MCP server shutting down");

    Ok(())
}
