//! Tool Router - builds the rmcp ToolRouter for STDIO/TCP transport.
//!
//! Each tool knows how to create its own route.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{DiningMenuTool, DiningOptionsTool, ToolContext};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(context: ToolContext) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(DiningOptionsTool::create_route(context.clone()))
        .with_route(DiningMenuTool::create_route(context))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::{Config, DiningConfig};
    use crate::domains::dining::DiningClient;
    use std::sync::Arc;

    struct TestServer {}

    fn test_context() -> ToolContext {
        let client = DiningClient::new(&DiningConfig::default()).unwrap();
        ToolContext::new(Arc::new(client), &Config::default())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_context());
        let tools = router.list_all();
        assert_eq!(tools.len(), 2);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_dining_options"));
        assert!(names.contains(&"get_dining_menu"));
    }

    #[test]
    fn test_registry_matches_router() {
        let context = test_context();
        let registry = ToolRegistry::new(context.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(context);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
