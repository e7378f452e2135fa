//! Tool Registry - central registration and dispatch for all tools.
//!
//! The router serves STDIO/TCP; the HTTP transport dispatches through
//! [`ToolRegistry::call_tool`] instead.

use rmcp::model::Tool;
#[cfg(feature = "http")]
use tracing::warn;

use super::definitions::{DiningMenuTool, DiningOptionsTool, ToolContext};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    context: ToolContext,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(context: ToolContext) -> Self {
        Self { context }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![DiningOptionsTool::NAME, DiningMenuTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![DiningOptionsTool::to_tool(), DiningMenuTool::to_tool()]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        match name {
            DiningOptionsTool::NAME => {
                DiningOptionsTool::http_handler(arguments, &self.context).await
            }
            DiningMenuTool::NAME => DiningMenuTool::http_handler(arguments, &self.context).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(super::ToolError::not_found(name).to_string())
            }
        }
    }
}
