//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter used by the transports by delegating
//! to the tool definitions themselves. Each tool knows how to create its own
//! route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::jules::JulesClient;

use super::definitions::{
    ApprovePlanTool, CreateSessionTool, GetActivityTool, GetSessionTool, GetSourceTool,
    ListActivitiesTool, ListSessionsTool, ListSourcesTool, SendMessageTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<JulesClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(ListSourcesTool::create_route(client.clone()))
        .with_route(GetSourceTool::create_route(client.clone()))
        .with_route(ListSessionsTool::create_route(client.clone()))
        .with_route(GetSessionTool::create_route(client.clone()))
        .with_route(CreateSessionTool::create_route(client.clone()))
        .with_route(ApprovePlanTool::create_route(client.clone()))
        .with_route(SendMessageTool::create_route(client.clone()))
        .with_route(ListActivitiesTool::create_route(client.clone()))
        .with_route(GetActivityTool::create_route(client))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::JulesConfig;

    struct TestServer {}

    fn test_client() -> Arc<JulesClient> {
        let config = JulesConfig {
            api_key: Some("test-key".to_string()),
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 5,
        };
        Arc::new(JulesClient::new(&config).unwrap())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 9);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"list_sources"));
        assert!(names.contains(&"get_source"));
        assert!(names.contains(&"list_sessions"));
        assert!(names.contains(&"get_session"));
        assert!(names.contains(&"create_session"));
        assert!(names.contains(&"approve_plan"));
        assert!(names.contains(&"send_message"));
        assert!(names.contains(&"list_activities"));
        assert!(names.contains(&"get_activity"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router expose the same tools
        let client = test_client();
        let registry = ToolRegistry::new(client.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(client);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
