//! Tools for the Jules activities collection (the audit/progress trail
//! recorded within a session).

mod get;
mod list;

pub use get::{GetActivityParams, GetActivityTool};
pub use list::{ListActivitiesParams, ListActivitiesTool};
