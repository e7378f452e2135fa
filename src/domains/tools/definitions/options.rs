//! Dining options tool.
//!
//! Lists the dining halls and dates the menu site currently offers, plus
//! the fixed meal types, so callers know which values `get_dining_menu`
//! accepts.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::{ToolContext, parse_params, to_call_result, with_timeout};
use crate::domains::dining::{DiningClient, DiningResult, format_options};
use crate::domains::tools::ToolError;

/// The options tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct DiningOptionsParams {}

/// Dining options tool implementation.
#[derive(Debug, Clone)]
pub struct DiningOptionsTool;

impl DiningOptionsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_dining_options";

    /// Human-readable title.
    pub const TITLE: &'static str = "Get Dining Options";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get available Stanford dining halls, upcoming dates, and meal types.";

    #[instrument(skip_all)]
    pub async fn execute(client: &DiningClient) -> DiningResult<String> {
        info!("Dining options tool called");
        let options = client.fetch_options().await?;
        Ok(format_options(&options))
    }

    pub async fn call(arguments: JsonObject, context: &ToolContext) -> Result<String, ToolError> {
        let _params: DiningOptionsParams = parse_params(arguments)?;
        with_timeout(context.timeout, Self::execute(&context.client)).await
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        context: &ToolContext,
    ) -> Result<serde_json::Value, String> {
        let arguments = match arguments {
            serde_json::Value::Object(map) => map,
            serde_json::Value::Null => JsonObject::new(),
            _ => return Err("Arguments must be an object".to_string()),
        };
        super::common::to_http_response(Self::call(arguments, context).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            title: Some(Self::TITLE.into()),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DiningOptionsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(context: ToolContext) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let context = context.clone();
            async move { to_call_result(Self::call(args, &context).await) }.boxed()
        })
    }
}
