//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file, grouped by the upstream resource
//! collection it targets.

pub mod activities;
pub mod common;
pub mod sessions;
pub mod sources;

pub use activities::{GetActivityParams, GetActivityTool, ListActivitiesParams, ListActivitiesTool};
pub use sessions::{
    ApprovePlanParams, ApprovePlanTool, CreateSessionParams, CreateSessionTool, GetSessionParams,
    GetSessionTool, ListSessionsParams, ListSessionsTool, SendMessageParams, SendMessageTool,
};
pub use sources::{GetSourceParams, GetSourceTool, ListSourcesParams, ListSourcesTool};
