//! List sessions tool definition.

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

/// Parameters for the list sessions tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListSessionsParams {
    /// Maximum number of sessions to return per page.
    #[schemars(description = "Maximum number of sessions to return per page")]
    #[serde(default)]
    pub page_size: Option<u32>,

    /// Page token from a previous list_sessions response.
    #[schemars(description = "Page token from a previous list_sessions response")]
    #[serde(default)]
    pub page_token: Option<String>,
}

/// List sessions tool - lists Jules work sessions.
pub struct ListSessionsTool;

impl ListSessionsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_sessions";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List Jules sessions. Supports pagination via pageSize and pageToken.";

    /// Upstream path for this tool.
    pub fn request_path() -> &'static str {
        "sessions"
    }

    /// Query parameters derived from the arguments.
    pub fn request_query(params: &ListSessionsParams) -> Vec<(String, String)> {
        page_query(params.page_size, params.page_token.as_deref())
    }

    /// Execute the tool logic: one GET against the sessions collection.
    pub async fn execute(params: &ListSessionsParams, client: &JulesClient) -> CallToolResult {
        info!("Listing Jules sessions");
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
            input_schema: cached_schema_for_type::<ListSessionsParams>(),
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
                let params: ListSessionsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_empty_without_paging_args() {
        let params: ListSessionsParams = serde_json::from_str("{}").unwrap();
        assert!(ListSessionsTool::request_query(&params).is_empty());
    }

    #[test]
    fn test_query_single_key() {
        let params: ListSessionsParams =
            serde_json::from_str(r#"{"pageToken": "next"}"#).unwrap();
        assert_eq!(
            ListSessionsTool::request_query(&params),
            vec![("pageToken".to_string(), "next".to_string())]
        );
    }
}
