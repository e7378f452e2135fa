//! Dining menu tool.
//!
//! Looks up what a dining hall serves for one date and meal. Each call
//! acquires a fresh page session, replays it in a menu postback and renders
//! the extracted items as markdown.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::{ToolContext, parse_params, to_call_result, with_timeout};
use crate::domains::dining::{DiningClient, DiningResult, MealType, MenuQuery, format_menu};
use crate::domains::tools::ToolError;

/// Parameters for a menu lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DiningMenuParams {
    /// Dining hall value as listed by `get_dining_options`.
    #[schemars(
        description = "Dining hall value from get_dining_options, e.g. 'Arrillaga' or 'FlorenceMoore'"
    )]
    pub location: String,

    /// Date in M/D/YYYY form. Not validated; the site decides.
    #[schemars(description = "Date in M/D/YYYY format, e.g. '2/26/2026'")]
    pub date: String,

    /// Meal period.
    #[schemars(description = "Meal type")]
    pub meal_type: MealType,
}

impl From<&DiningMenuParams> for MenuQuery {
    fn from(params: &DiningMenuParams) -> Self {
        MenuQuery {
            location: params.location.clone(),
            date: params.date.clone(),
            meal_type: params.meal_type,
        }
    }
}

/// Dining menu tool implementation.
#[derive(Debug, Clone)]
pub struct DiningMenuTool;

impl DiningMenuTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_dining_menu";

    /// Human-readable title.
    pub const TITLE: &'static str = "Get Dining Menu";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the menu for a Stanford dining hall on a specific date and meal. \
         Call get_dining_options first to see valid location values and available dates.";

    /// Fetch and render the menu.
    #[instrument(
        skip_all,
        fields(location = %params.location, date = %params.date, meal_type = %params.meal_type)
    )]
    pub async fn execute(
        params: &DiningMenuParams,
        client: &DiningClient,
    ) -> DiningResult<String> {
        info!("Dining menu tool called");

        let items = client.fetch_menu(&MenuQuery::from(params)).await?;
        Ok(format_menu(
            &params.location,
            &params.date,
            params.meal_type.as_str(),
            &items,
        ))
    }

    /// Validate arguments, then run under the tool time limit.
    pub async fn call(arguments: JsonObject, context: &ToolContext) -> Result<String, ToolError> {
        let params: DiningMenuParams = parse_params(arguments)?;
        with_timeout(context.timeout, Self::execute(&params, &context.client)).await
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        context: &ToolContext,
    ) -> Result<serde_json::Value, String> {
        let arguments = match arguments {
            serde_json::Value::Object(map) => map,
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
            input_schema: cached_schema_for_type::<DiningMenuParams>(),
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
