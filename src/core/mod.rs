//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration, the upstream Jules API client,
//! server lifecycle management, and transport layer abstractions.

pub mod config;
pub mod error;
pub mod jules;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use jules::{ApiError, JulesClient};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
