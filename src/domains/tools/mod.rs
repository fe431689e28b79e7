//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Each tool is a stateless relay: arguments in, one Jules API request out,
//! normalized result back.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Central tool registry and dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., under `sessions/`)
//! 2. Define params, `execute()`, and the request-shaping helpers
//! 3. Export in `definitions/mod.rs`
//! 4. Add route in `router.rs` using `with_route()`
//! 5. Register in `registry.rs` for dispatch
//!
//! **No need to modify `server.rs`!** The router is built dynamically.

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
