//! MCP server implementation for the contact CRM.
//!
//! This module provides the MCP protocol server that exposes the contact
//! store to AI assistants through the Model Context Protocol.

pub mod handlers;

pub use handlers::{ContactMcpServer, SharedContactStore};

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the contact MCP server with stdio transport.
///
/// This function starts the MCP server and runs it until the client
/// disconnects. It communicates via stdin/stdout using the MCP protocol.
pub async fn run_server(server: ContactMcpServer) -> Result<()> {
    // Serve the server with stdio transport
    let service = server.serve(stdio()).await?;

    // Wait for completion
    service.waiting().await?;

    Ok(())
}
