//! Approve plan tool definition.
//!
//! Approves the plan proposed by a session so execution can proceed.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::info;

use crate::core::jules::JulesClient;
use crate::domains::tools::definitions::common::api_result;

/// Parameters for the approve plan tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApprovePlanParams {
    /// Identifier of the session whose plan to approve.
    #[schemars(description = "Identifier of the session whose plan to approve")]
    pub session_id: String,
}

/// Approve plan tool - accepts a session's proposed plan.
pub struct ApprovePlanTool;

impl ApprovePlanTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "approve_plan";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Approve the plan proposed by a Jules session so execution proceeds.";

    /// Upstream path for this tool, using the custom-verb suffix.
    pub fn request_path(params: &ApprovePlanParams) -> String {
        format!("sessions/{}:approvePlan", params.session_id)
    }

    /// JSON body for this tool: always an empty object.
    pub fn request_body() -> Value {
        Value::Object(Map::new())
    }

    /// Execute the tool logic: one POST to the approvePlan verb.
    pub async fn execute(params: &ApprovePlanParams, client: &JulesClient) -> CallToolResult {
        info!("Approving plan for Jules session {}", params.session_id);
        api_result(
            client
                .post(&Self::request_path(params), &Self::request_body())
                .await,
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ApprovePlanParams>(),
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
                let params: ApprovePlanParams =
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
    use serde_json::json;

    #[test]
    fn test_path_contains_approve_plan_verb() {
        let params: ApprovePlanParams =
            serde_json::from_str(r#"{"sessionId": "abc"}"#).unwrap();
        let path = ApprovePlanTool::request_path(&params);
        assert!(path.contains("sessions/abc:approvePlan"));
    }

    #[test]
    fn test_body_is_empty_object() {
        assert_eq!(ApprovePlanTool::request_body(), json!({}));
    }
}
