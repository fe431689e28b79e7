//! Jules API client error types.

use thiserror::Error;

/// Result type for upstream API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while talking to the Jules API.
///
/// Network failures and non-2xx responses carry the same severity: both are
/// surfaced to the tool caller as an error result and never terminate the
/// serving process.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The upstream returned a non-success status code. The raw response
    /// body is preserved as the failure detail.
    #[error("Jules API returned status {code}: {body}")]
    Status { code: u16, body: String },

    /// The request could not be completed (connection refused, DNS failure,
    /// timeout, etc.).
    #[error("Request to Jules API failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The upstream returned a 2xx response whose body is not valid JSON.
    #[error("Invalid JSON in Jules API response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The client could not be constructed from the given configuration.
    #[error("Invalid client configuration: {0}")]
    Configuration(String),
}

impl ApiError {
    /// Create a status error from a code and raw body text.
    pub fn status(code: u16, body: impl Into<String>) -> Self {
        Self::Status {
            code,
            body: body.into(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}
