//! Upstream Jules API client.
//!
//! This module wraps the Jules HTTP API behind a small client: one request
//! per call, no retries, and a normalized success-or-error outcome.

mod client;
mod error;

pub use client::{JulesClient, decode_response};
pub use error::{ApiError, ApiResult};
