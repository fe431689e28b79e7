//! List sources tool definition.
//!
//! Lists the source repositories connected to Jules.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::core::jules::JulesClient;
use crate::domains::tools::definitions::common::{api_result, page_query};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the list sources tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListSourcesParams {
    /// Maximum number of sources to return per page.
    #[schemars(description = "Maximum number of sources to return per page")]
    #[serde(default)]
    pub page_size: Option<u32>,

    /// Page token from a previous list_sources response.
    #[schemars(description = "Page token from a previous list_sources response")]
    #[serde(default)]
    pub page_token: Option<String>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// List sources tool - lists repositories the agent can operate on.
pub struct ListSourcesTool;

impl ListSourcesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_sources";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List the source repositories connected to Jules. Supports pagination via pageSize and pageToken.";

    /// Upstream path for this tool.
    pub fn request_path() -> &'static str {
        "sources"
    }

    /// Query parameters derived from the arguments.
    pub fn request_query(params: &ListSourcesParams) -> Vec<(String, String)> {
        page_query(params.page_size, params.page_token.as_deref())
    }

    /// Execute the tool logic: one GET against the sources collection.
    pub async fn execute(params: &ListSourcesParams, client: &JulesClient) -> CallToolResult {
        info!("Listing Jules sources");
        api_result(
            client
                .get(Self::request_path(), &Self::request_query(params))
                .await,
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListSourcesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(client: Arc<JulesClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: ListSourcesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_empty_without_paging_args() {
        let params: ListSourcesParams = serde_json::from_str("{}").unwrap();
        assert!(ListSourcesTool::request_query(&params).is_empty());
    }

    #[test]
    fn test_query_contains_supplied_keys() {
        let params: ListSourcesParams =
            serde_json::from_str(r#"{"pageSize": 10, "pageToken": "abc"}"#).unwrap();
        let query = ListSourcesTool::request_query(&params);
        assert_eq!(
            query,
            vec![
                ("pageSize".to_string(), "10".to_string()),
                ("pageToken".to_string(), "abc".to_string()),
            ]
        );
    }

    #[test]
    fn test_camel_case_arguments() {
        let params: ListSourcesParams =
            serde_json::from_str(r#"{"pageSize": 3}"#).unwrap();
        assert_eq!(params.page_size, Some(3));
        assert!(params.page_token.is_none());
    }
}
