//! Redmine MCP server binary.
//!
//! This binary runs the MCP server using stdio transport. Configuration
//! comes from the environment:
//!
//! - `REDMINE_URL` - base URL of the Redmine instance (required)
//! - `REDMINE_API_KEY` - API key for authentication
//! - `REDMINE_USERNAME` / `REDMINE_PASSWORD` - basic auth credentials

use std::sync::Arc;

use redmine_api::{RedmineClient, RedmineConfig};
use redmine_mcp::RedmineMcpServer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log to stderr; stdout is reserved for the MCP protocol.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Missing configuration is startup-fatal, not a per-call error.
    let config = RedmineConfig::from_env()?;
    let auth_mode = if config.api_key.is_some() {
        "API key"
    } else {
        "basic auth"
    };
    tracing::info!(url = %config.url, auth = auth_mode, "starting redmine-mcp server");

    let client = RedmineClient::new(&config, None)?;
    let server = RedmineMcpServer::new(Arc::new(client));
    server.run().await?;

    Ok(())
}
