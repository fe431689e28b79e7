//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain represents a specific area of functionality within the MCP
//! server. The only domain today is `tools`, mirroring the upstream Jules
//! resource collections (sources, sessions, activities).

pub mod tools;
