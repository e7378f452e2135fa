//! Helpers shared by the dining tools.
//!
//! Both tools follow the same path: deserialize the arguments into a typed
//! params struct (its `JsonSchema` is the advertised input schema, so the
//! schema and the validation cannot drift apart), run the scrape under the
//! hosting time limit, and wrap the text in a tool result.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::core::config::Config;
use crate::domains::dining::{DiningClient, DiningResult};
use crate::domains::tools::ToolError;

/// Shared state every tool call runs against.
#[derive(Debug, Clone)]
pub struct ToolContext {
    pub client: Arc<DiningClient>,
    pub timeout: Duration,
}

impl ToolContext {
    pub fn new(client: Arc<DiningClient>, config: &Config) -> Self {
        Self {
            client,
            timeout: config.tools.timeout(),
        }
    }
}

/// Validate raw arguments against a params type.
pub fn parse_params<T: DeserializeOwned>(arguments: JsonObject) -> Result<T, ToolError> {
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Run an upstream operation under the hosting time limit.
pub async fn with_timeout<T>(
    limit: Duration,
    operation: impl Future<Output = DiningResult<T>>,
) -> Result<T, ToolError> {
    match tokio::time::timeout(limit, operation).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(ToolError::Timeout(limit)),
    }
}

/// Create a success result with text content.
pub fn success_result(text: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Map a tool outcome onto the MCP reply.
///
/// Bad arguments are rejected as `invalid_params`; scrape failures are
/// reported in-band so the model can see what went wrong.
pub fn to_call_result(outcome: Result<String, ToolError>) -> Result<CallToolResult, McpError> {
    match outcome {
        Ok(text) => Ok(success_result(text)),
        Err(e) if e.is_protocol_error() => Err(e.into()),
        Err(e) => Ok(error_result(&e.to_string())),
    }
}

/// JSON body of a tool result for the HTTP transport.
#[cfg(feature = "http")]
pub fn to_http_response(
    outcome: Result<String, ToolError>,
) -> Result<serde_json::Value, String> {
    let result = to_call_result(outcome).map_err(|e| e.message.to_string())?;
    Ok(serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    }))
}
