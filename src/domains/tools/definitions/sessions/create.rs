//! Create session tool definition.
//!
//! Starts a new Jules session against a connected source. The required
//! arguments compose the nested `sourceContext` body; optional arguments are
//! included only when the caller supplied them, with presence-check
//! semantics that distinguish "not provided" from "explicitly false".

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tracing::info;

use crate::core::jules::JulesClient;
use crate::domains::tools::definitions::common::api_result;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the create session tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionParams {
    /// The task prompt for the agent.
    #[schemars(description = "The task prompt describing what the agent should do")]
    pub prompt: String,

    /// Fully-qualified source name the session operates on.
    #[schemars(description = "Fully-qualified source name, e.g. sources/github/owner/repo")]
    pub source: String,

    /// Git branch the session starts from.
    #[schemars(description = "Git branch the session starts from, e.g. main")]
    pub starting_branch: String,

    /// Optional human-readable session title.
    #[schemars(description = "Optional human-readable session title")]
    #[serde(default)]
    pub title: Option<String>,

    /// Optional automation mode, e.g. AUTO_CREATE_PR.
    #[schemars(description = "Optional automation mode, e.g. AUTO_CREATE_PR")]
    #[serde(default)]
    pub automation_mode: Option<String>,

    /// Whether the session's plan must be approved before execution.
    /// An explicit `false` is forwarded; omission leaves the upstream default.
    #[schemars(description = "Whether the plan must be approved before execution proceeds")]
    #[serde(default)]
    pub require_plan_approval: Option<bool>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Create session tool - starts a new unit of autonomous work.
pub struct CreateSessionTool;

impl CreateSessionTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_session";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a new Jules session. Requires a prompt, a source (fully-qualified name), and a starting branch. Optionally takes a title, an automation mode, and whether plan approval is required.";

    /// Upstream path for this tool.
    pub fn request_path() -> &'static str {
        "sessions"
    }

    /// JSON body derived from the arguments. Optional keys appear only when
    /// the caller supplied them; no extra keys are ever added.
    pub fn request_body(params: &CreateSessionParams) -> Value {
        let mut body = Map::new();
        body.insert("prompt".to_string(), Value::String(params.prompt.clone()));
        body.insert(
            "sourceContext".to_string(),
            json!({
                "source": params.source,
                "githubRepoContext": {
                    "startingBranch": params.starting_branch,
                }
            }),
        );

        if let Some(title) = &params.title {
            body.insert("title".to_string(), Value::String(title.clone()));
        }
        if let Some(mode) = &params.automation_mode {
            body.insert("automationMode".to_string(), Value::String(mode.clone()));
        }
        if let Some(require) = params.require_plan_approval {
            body.insert("requirePlanApproval".to_string(), Value::Bool(require));
        }

        Value::Object(body)
    }

    /// Execute the tool logic: one POST creating the session.
    pub async fn execute(params: &CreateSessionParams, client: &JulesClient) -> CallToolResult {
        info!("Creating Jules session on {}", params.source);
        api_result(
            client
                .post(Self::request_path(), &Self::request_body(params))
                .await,
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CreateSessionParams>(),
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
                let params: CreateSessionParams =
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
