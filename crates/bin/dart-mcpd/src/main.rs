//! Daemon entry point for the OpenDART MCP server.
//!
//! Loads configuration from the command line, the environment, and an
//! optional `.env` file, builds the shared OpenDART context, and serves MCP
//! over stdio or streamable HTTP.

mod config;

use std::sync::Arc;

use dart_core::services::DartContext;
use dart_mcp::DartMcp;
use dart_mcp::server::{McpHttpServerConfig, serve_stdio, serve_streamable_http};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::DartConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let _ = dotenvy::dotenv();
    let config = DartConfig::from_args()?;
    init_tracing(&config.log_filter);

    info!(
        base_url = %config.base_url,
        data_dir = %config.data_dir.display(),
        stdio = config.enable_stdio,
        "starting dart-mcpd"
    );
    let context = Arc::new(DartContext::new(config.context_config())?);
    let server = DartMcp::new(context);

    if config.enable_stdio {
        serve_stdio(server).await
    } else {
        serve_streamable_http(server, McpHttpServerConfig::new(config.mcp_http_addr)).await
    }
}

/// Logs go to stderr so the stdio transport keeps stdout to itself.
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
