//! Send message tool definition.
//!
//! Sends a follow-up message to a running session.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

use crate::core::jules::JulesClient;
use crate::domains::tools::definitions::common::api_result;

/// Parameters for the send message tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageParams {
    /// Identifier of the session to message.
    #[schemars(description = "Identifier of the session to message")]
    pub session_id: String,

    /// The message to send to the agent.
    #[schemars(description = "The message to send to the agent")]
    pub prompt: String,
}

/// Send message tool - relays a message into a session.
pub struct SendMessageTool;

impl SendMessageTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "send_message";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Send a message to a running Jules session.";

    /// Upstream path for this tool, using the custom-verb suffix.
    pub fn request_path(params: &SendMessageParams) -> String {
        format!("sessions/{}:sendMessage", params.session_id)
    }

    /// JSON body for this tool.
    pub fn request_body(params: &SendMessageParams) -> Value {
        json!({ "prompt": params.prompt })
    }

    /// Execute the tool logic: one POST to the sendMessage verb.
    pub async fn execute(params: &SendMessageParams, client: &JulesClient) -> CallToolResult {
        info!("Sending message to Jules session {}", params.session_id);
        api_result(
            client
                .post(&Self::request_path(params), &Self::request_body(params))
                .await,
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SendMessageParams>(),
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
                let params: SendMessageParams =
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

    fn params() -> SendMessageParams {
        serde_json::from_str(r#"{"sessionId": "abc", "prompt": "continue"}"#).unwrap()
    }

    #[test]
    fn test_path_contains_send_message_verb() {
        assert_eq!(
            SendMessageTool::request_path(&params()),
            "sessions/abc:sendMessage"
        );
    }

    #[test]
    fn test_body_carries_only_the_prompt() {
        assert_eq!(
            SendMessageTool::request_body(&params()),
            json!({"prompt": "continue"})
        );
    }

    #[test]
    fn test_prompt_is_required() {
        let result: Result<SendMessageParams, _> =
            serde_json::from_str(r#"{"sessionId": "abc"}"#);
        assert!(result.is_err());
    }
}
