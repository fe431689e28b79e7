//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - The dispatch entry point mapping a (name, arguments) pair to one
//!   upstream call
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::core::jules::JulesClient;

use super::definitions::{
    ApprovePlanTool, CreateSessionTool, GetActivityTool, GetSessionTool, GetSourceTool,
    ListActivitiesTool, ListSessionsTool, ListSourcesTool, SendMessageTool,
    common::error_result,
};
use super::error::ToolError;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// The catalog is static: the same nine tools, in the same order, for the
/// lifetime of the process. Dispatch resolves a tool name to exactly one
/// upstream mapping rule; an unknown name fails immediately without any
/// network call.
pub struct ToolRegistry {
    client: Arc<JulesClient>,
}

impl ToolRegistry {
    /// Create a new tool registry sharing the given Jules client.
    pub fn new(client: Arc<JulesClient>) -> Self {
        Self { client }
    }

    /// Get all tool names, in catalog order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            ListSourcesTool::NAME,
            GetSourceTool::NAME,
            ListSessionsTool::NAME,
            GetSessionTool::NAME,
            CreateSessionTool::NAME,
            ApprovePlanTool::NAME,
            SendMessageTool::NAME,
            ListActivitiesTool::NAME,
            GetActivityTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for the catalog order.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            ListSourcesTool::to_tool(),
            GetSourceTool::to_tool(),
            ListSessionsTool::to_tool(),
            GetSessionTool::to_tool(),
            CreateSessionTool::to_tool(),
            ApprovePlanTool::to_tool(),
            SendMessageTool::to_tool(),
            ListActivitiesTool::to_tool(),
            GetActivityTool::to_tool(),
        ]
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// Every failure - unknown name, malformed arguments, upstream error -
    /// is folded into an error result here; nothing escapes the invocation
    /// boundary.
    pub async fn call_tool(&self, name: &str, arguments: serde_json::Value) -> CallToolResult {
        match name {
            ListSourcesTool::NAME => match parse(arguments) {
                Ok(params) => ListSourcesTool::execute(&params, &self.client).await,
                Err(e) => error_result(&e.to_string()),
            },
            GetSourceTool::NAME => match parse(arguments) {
                Ok(params) => GetSourceTool::execute(&params, &self.client).await,
                Err(e) => error_result(&e.to_string()),
            },
            ListSessionsTool::NAME => match parse(arguments) {
                Ok(params) => ListSessionsTool::execute(&params, &self.client).await,
                Err(e) => error_result(&e.to_string()),
            },
            GetSessionTool::NAME => match parse(arguments) {
                Ok(params) => GetSessionTool::execute(&params, &self.client).await,
                Err(e) => error_result(&e.to_string()),
            },
            CreateSessionTool::NAME => match parse(arguments) {
                Ok(params) => CreateSessionTool::execute(&params, &self.client).await,
                Err(e) => error_result(&e.to_string()),
            },
            ApprovePlanTool::NAME => match parse(arguments) {
                Ok(params) => ApprovePlanTool::execute(&params, &self.client).await,
                Err(e) => error_result(&e.to_string()),
            },
            SendMessageTool::NAME => match parse(arguments) {
                Ok(params) => SendMessageTool::execute(&params, &self.client).await,
                Err(e) => error_result(&e.to_string()),
            },
            ListActivitiesTool::NAME => match parse(arguments) {
                Ok(params) => ListActivitiesTool::execute(&params, &self.client).await,
                Err(e) => error_result(&e.to_string()),
            },
            GetActivityTool::NAME => match parse(arguments) {
                Ok(params) => GetActivityTool::execute(&params, &self.client).await,
                Err(e) => error_result(&e.to_string()),
            },
            _ => {
                warn!("Unknown tool requested: {}", name);
                error_result(&ToolError::unknown(name).to_string())
            }
        }
    }
}

/// Deserialize tool arguments into a typed params struct.
fn parse<T: DeserializeOwned>(arguments: serde_json::Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::JulesConfig;
    use rmcp::model::RawContent;
    use serde_json::json;
    use std::collections::HashSet;

    fn test_registry() -> ToolRegistry {
        // Port 9 (discard) is not listening; any attempted call fails fast.
        let config = JulesConfig {
            api_key: Some("test-key".to_string()),
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 5,
        };
        ToolRegistry::new(Arc::new(JulesClient::new(&config).unwrap()))
    }

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_registry_has_nine_unique_tools() {
        let registry = test_registry();
        let names = registry.tool_names();
        assert_eq!(names.len(), 9);

        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), 9);

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
    fn test_catalog_is_order_stable() {
        let registry = test_registry();
        assert_eq!(registry.tool_names(), registry.tool_names());

        let first: Vec<_> = ToolRegistry::get_all_tools()
            .iter()
            .map(|t| t.name.to_string())
            .collect();
        let second: Vec<_> = ToolRegistry::get_all_tools()
            .iter()
            .map(|t| t.name.to_string())
            .collect();
        assert_eq!(first, second);
        assert_eq!(first, registry.tool_names());
    }

    #[test]
    fn test_all_tools_have_descriptions_and_schemas() {
        for tool in ToolRegistry::get_all_tools() {
            assert!(tool.description.is_some(), "{} has no description", tool.name);
            assert!(
                !tool.input_schema.is_empty(),
                "{} has an empty input schema",
                tool.name
            );
        }
    }

    #[tokio::test]
    async fn test_unknown_tool_fails_without_network() {
        let registry = test_registry();
        let result = registry.call_tool("nonexistent_tool", json!({})).await;
        assert!(result.is_error.unwrap_or(false));
        let text = result_text(&result);
        assert!(text.contains("Unknown tool"));
        assert!(text.contains("nonexistent_tool"));
    }

    #[tokio::test]
    async fn test_invalid_arguments_fail_without_network() {
        let registry = test_registry();
        let result = registry.call_tool("get_session", json!({})).await;
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("Invalid arguments"));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_an_error_result_not_a_panic() {
        let registry = test_registry();
        let result = registry
            .call_tool("list_sources", json!({"pageSize": 5}))
            .await;
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).starts_with("Error: "));
    }
}
