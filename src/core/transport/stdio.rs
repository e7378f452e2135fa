//! STDIO transport implementation.
//!
//! The default MCP mode: one client, JSON-RPC over stdin/stdout. Logging
//! must stay on stderr while this transport runs.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve a single client until stdin closes.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - serving dining tools on stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("STDIO client disconnected");
        Ok(())
    }
}
