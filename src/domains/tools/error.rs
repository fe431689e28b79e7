//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur during tool dispatch.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool name does not resolve to any dispatch rule.
    #[error("Unknown tool: {0}")]
    Unknown(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The upstream call failed.
    #[error(transparent)]
    Api(#[from] crate::core::jules::ApiError),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::Unknown(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}
