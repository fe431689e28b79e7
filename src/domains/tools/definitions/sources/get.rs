//! Get source tool definition.
//!
//! Fetches a single source by its fully-qualified resource name.

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
use crate::domains::tools::definitions::common::api_result;

/// Parameters for the get source tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetSourceParams {
    /// Fully-qualified source name, e.g. `sources/github/owner/repo`.
    #[schemars(description = "Fully-qualified source name, e.g. sources/github/owner/repo")]
    pub source_name: String,
}

/// Get source tool - fetches one connected repository by name.
pub struct GetSourceTool;

impl GetSourceTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_source";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get a single Jules source by its fully-qualified resource name (e.g. sources/github/owner/repo).";

    /// Upstream path for this tool. The source name is itself a path.
    pub fn request_path(params: &GetSourceParams) -> String {
        params.source_name.trim_start_matches('/').to_string()
    }

    /// Execute the tool logic: one GET against the named source.
    pub async fn execute(params: &GetSourceParams, client: &JulesClient) -> CallToolResult {
        info!("Fetching Jules source {}", params.source_name);
        api_result(client.get(&Self::request_path(params), &[]).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetSourceParams>(),
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
                let params: GetSourceParams =
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
    fn test_path_is_the_source_name() {
        let params: GetSourceParams =
            serde_json::from_str(r#"{"sourceName": "sources/github/o/r"}"#).unwrap();
        assert_eq!(GetSourceTool::request_path(&params), "sources/github/o/r");
    }

    #[test]
    fn test_leading_slash_is_stripped() {
        let params = GetSourceParams {
            source_name: "/sources/github/o/r".to_string(),
        };
        assert_eq!(GetSourceTool::request_path(&params), "sources/github/o/r");
    }

    #[test]
    fn test_source_name_is_required() {
        let result: Result<GetSourceParams, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }
}
