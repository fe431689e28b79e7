//! Get activity tool definition.

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

/// Parameters for the get activity tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetActivityParams {
    /// Identifier of the session the activity belongs to.
    #[schemars(description = "Identifier of the session the activity belongs to")]
    pub session_id: String,

    /// Identifier of the activity to fetch.
    #[schemars(description = "Identifier of the activity to fetch")]
    pub activity_id: String,
}

/// Get activity tool - fetches one recorded activity.
pub struct GetActivityTool;

impl GetActivityTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_activity";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get a single activity from a Jules session's progress trail.";

    /// Upstream path for this tool.
    pub fn request_path(params: &GetActivityParams) -> String {
        format!(
            "sessions/{}/activities/{}",
            params.session_id, params.activity_id
        )
    }

    /// Execute the tool logic: one GET against the named activity.
    pub async fn execute(params: &GetActivityParams, client: &JulesClient) -> CallToolResult {
        info!(
            "Fetching activity {} of Jules session {}",
            params.activity_id, params.session_id
        );
        api_result(client.get(&Self::request_path(params), &[]).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetActivityParams>(),
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
                let params: GetActivityParams =
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
    fn test_path_embeds_both_identifiers() {
        let params: GetActivityParams =
            serde_json::from_str(r#"{"sessionId": "abc", "activityId": "act-1"}"#).unwrap();
        assert_eq!(
            GetActivityTool::request_path(&params),
            "sessions/abc/activities/act-1"
        );
    }

    #[test]
    fn test_both_identifiers_required() {
        let result: Result<GetActivityParams, _> =
            serde_json::from_str(r#"{"sessionId": "abc"}"#);
        assert!(result.is_err());
    }
}
