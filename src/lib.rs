//! Jules MCP Server Library
//!
//! This crate exposes the Jules coding-agent HTTP API as a Model Context
//! Protocol (MCP) server. Every MCP tool call maps to exactly one upstream
//! HTTP request; the upstream JSON payload is passed back to the caller
//! verbatim.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the upstream Jules API client, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools covering Jules sources, sessions, and activities
//!
//! # Example
//!
//! ```rust,no_run
//! use jules_mcp_server::core::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, McpServer, Result};
