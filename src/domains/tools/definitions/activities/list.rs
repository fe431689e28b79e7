//! List activities tool definition.

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

/// Parameters for the list activities tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListActivitiesParams {
    /// Identifier of the session whose activities to list.
    #[schemars(description = "Identifier of the session whose activities to list")]
    pub session_id: String,

    /// Maximum number of activities to return per page.
    #[schemars(description = "Maximum number of activities to return per page")]
    #[serde(default)]
    pub page_size: Option<u32>,

    /// Page token from a previous list_activities response.
    #[schemars(description = "Page token from a previous list_activities response")]
    #[serde(default)]
    pub page_token: Option<String>,
}

/// List activities tool - lists a session's progress trail.
pub struct ListActivitiesTool;

impl ListActivitiesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_activities";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List the activities recorded for a Jules session. Supports pagination via pageSize and pageToken.";

    /// Upstream path for this tool.
    pub fn request_path(params: &ListActivitiesParams) -> String {
        format!("sessions/{}/activities", params.session_id)
    }

    /// Query parameters derived from the arguments.
    pub fn request_query(params: &ListActivitiesParams) -> Vec<(String, String)> {
        page_query(params.page_size, params.page_token.as_deref())
    }

    /// Execute the tool logic: one GET against the session's activities.
    pub async fn execute(params: &ListActivitiesParams, client: &JulesClient) -> CallToolResult {
        info!("Listing activities for Jules session {}", params.session_id);
        api_result(
            client
                .get(&Self::request_path(params), &Self::request_query(params))
                .await,
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListActivitiesParams>(),
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
                let params: ListActivitiesParams =
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
        let params: ListActivitiesParams =
            serde_json::from_str(r#"{"sessionId": "abc"}"#).unwrap();
        assert_eq!(
            ListActivitiesTool::request_path(&params),
            "sessions/abc/activities"
        );
        assert!(ListActivitiesTool::request_query(&params).is_empty());
    }

    #[test]
    fn test_paging_args_map_to_query() {
        let params: ListActivitiesParams =
            serde_json::from_str(r#"{"sessionId": "abc", "pageSize": 50}"#).unwrap();
        assert_eq!(
            ListActivitiesTool::request_query(&params),
            vec![("pageSize".to_string(), "50".to_string())]
        );
    }

    #[test]
    fn test_session_id_is_required() {
        let result: Result<ListActivitiesParams, _> =
            serde_json::from_str(r#"{"pageSize": 5}"#);
        assert!(result.is_err());
    }
}
