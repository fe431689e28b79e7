//! Get session tool definition.

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

/// Parameters for the get session tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetSessionParams {
    /// Identifier of the session to fetch.
    #[schemars(description = "Identifier of the session to fetch")]
    pub session_id: String,
}

/// Get session tool - fetches one session by id.
pub struct GetSessionTool;

impl GetSessionTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_session";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get a single Jules session by its identifier.";

    /// Upstream path for this tool.
    pub fn request_path(params: &GetSessionParams) -> String {
        format!("sessions/{}", params.session_id)
    }

    /// Execute the tool logic: one GET against the named session.
    pub async fn execute(params: &GetSessionParams, client: &JulesClient) -> CallToolResult {
        info!("Fetching Jules session {}", params.session_id);
        api_result(client.get(&Self::request_path(params), &[]).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetSessionParams>(),
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
                let params: GetSessionParams =
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
    fn test_path_embeds_session_id() {
        let params: GetSessionParams =
            serde_json::from_str(r#"{"sessionId": "abc"}"#).unwrap();
        assert_eq!(GetSessionTool::request_path(&params), "sessions/abc");
    }

    #[test]
    fn test_session_id_is_required() {
        let result: Result<GetSessionParams, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }
}
