//! Tools for the Jules sessions collection (task lifecycle).

mod approve_plan;
mod create;
mod get;
mod list;
mod send_message;

pub use approve_plan::{ApprovePlanParams, ApprovePlanTool};
pub use create::{CreateSessionParams, CreateSessionTool};
pub use get::{GetSessionParams, GetSessionTool};
pub use list::{ListSessionsParams, ListSessionsTool};
pub use send_message::{SendMessageParams, SendMessageTool};
