//! MCP Server implementation and lifecycle management.
//!
//! The server owns one [`DiningClient`] shared by every tool call and hands
//! tool dispatch to the router built in `domains/tools/router.rs`.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use super::error::Result as ServerResult;
use crate::domains::dining::DiningClient;
use crate::domains::tools::{ToolContext, build_tool_router};

#[cfg(feature = "http")]
use crate::domains::tools::ToolRegistry;

/// Instructions sent to clients on initialization.
pub const INSTRUCTIONS: &str = "Stanford dining hall menus. Call get_dining_options to list \
     dining halls, dates and meal types, then get_dining_menu with the listed value strings.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Context handed to every tool call.
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    tools: ToolContext,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> ServerResult<Self> {
        let config = Arc::new(config);
        let client = Arc::new(DiningClient::new(&config.dining)?);
        let tools = ToolContext::new(client, &config);

        Ok(Self {
            tool_router: build_tool_router::<Self>(tools.clone()),
            config,
            tools,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "title": t.title,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<serde_json::Value, String> {
        ToolRegistry::new(self.tools.clone())
            .call_tool(name, arguments)
            .await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
