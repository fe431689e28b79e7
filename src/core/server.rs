//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol and routes tool calls to the Jules API.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines:
//! - Parameters struct (deserialized from the tool call arguments)
//! - `execute()` method mapping the arguments to one upstream HTTP request
//! - `create_route()` wiring the tool into the rmcp ToolRouter
//!
//! The ToolRouter is built dynamically in `domains/tools/router.rs`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use crate::core::jules::JulesClient;
use crate::domains::tools::build_tool_router;

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. The shared
/// state is read-only for the lifetime of the process: the configuration,
/// the Jules client, and the tool router. Concurrent in-flight tool calls
/// need no synchronization.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Shared client for the upstream Jules API.
    client: Arc<JulesClient>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails when the Jules client cannot be built (missing or malformed
    /// API key).
    pub fn new(config: Config) -> crate::core::Result<Self> {
        let config = Arc::new(config);
        let client = Arc::new(JulesClient::new(&config.jules)?);

        Ok(Self {
            tool_router: build_tool_router::<Self>(client.clone()),
            config,
            client,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the shared Jules API client.
    pub fn client(&self) -> &Arc<JulesClient> {
        &self.client
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "MCP server for the Jules coding agent. Provides tools to browse \
                 connected sources, create and steer sessions, and inspect session \
                 activities."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::JulesConfig;

    fn test_config() -> Config {
        Config {
            jules: JulesConfig {
                api_key: Some("test-key".to_string()),
                ..JulesConfig::default()
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_server_new_with_key() {
        let server = McpServer::new(test_config()).unwrap();
        assert_eq!(server.name(), "jules-mcp-server");
    }

    #[test]
    fn test_server_new_without_key_fails() {
        let result = McpServer::new(Config::default());
        assert!(result.is_err());
    }
}
