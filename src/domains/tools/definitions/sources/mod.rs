//! Tools for the Jules sources collection (read-only discovery of connected
//! repositories).

mod get;
mod list;

pub use get::{GetSourceParams, GetSourceTool};
pub use list::{ListSourcesParams, ListSourcesTool};
