//! Common utilities shared across Jules tools.
//!
//! This module provides result envelope construction and the paging-argument
//! mapping shared by all list-style tools.

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;
use tracing::warn;

use crate::core::jules::ApiResult;

/// Create an error result with the `Error: <message>` envelope.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(format!("Error: {}", message))])
}

/// Create a success result carrying the upstream payload, pretty-printed,
/// as a single text content block. The payload is passed through verbatim:
/// no field filtering, renaming, or schema coercion.
pub fn json_result(payload: &Value) -> CallToolResult {
    match serde_json::to_string_pretty(payload) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => error_result(&format!("Failed to serialize response: {}", e)),
    }
}

/// Fold an upstream call outcome into the tool result envelope.
///
/// This is the invocation boundary: every upstream failure becomes an error
/// result here and never escapes as a crash.
pub fn api_result(outcome: ApiResult<Value>) -> CallToolResult {
    match outcome {
        Ok(payload) => json_result(&payload),
        Err(e) => error_result(&e.to_string()),
    }
}

/// Map optional paging arguments to query parameters.
///
/// Keys are included only when the caller supplied them; no arguments means
/// an empty query string and upstream defaults.
pub fn page_query(page_size: Option<u32>, page_token: Option<&str>) -> Vec<(String, String)> {
    let mut query = Vec::new();
    if let Some(size) = page_size {
        query.push(("pageSize".to_string(), size.to_string()));
    }
    if let Some(token) = page_token {
        query.push(("pageToken".to_string(), token.to_string()));
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::jules::ApiError;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_page_query_empty_without_args() {
        assert!(page_query(None, None).is_empty());
    }

    #[test]
    fn test_page_query_includes_only_supplied_keys() {
        let query = page_query(Some(25), None);
        assert_eq!(query, vec![("pageSize".to_string(), "25".to_string())]);

        let query = page_query(None, Some("tok-1"));
        assert_eq!(query, vec![("pageToken".to_string(), "tok-1".to_string())]);

        let query = page_query(Some(5), Some("tok-2"));
        assert_eq!(
            query,
            vec![
                ("pageSize".to_string(), "5".to_string()),
                ("pageToken".to_string(), "tok-2".to_string()),
            ]
        );
    }

    #[test]
    fn test_error_result_envelope() {
        let result = error_result("something broke");
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), "Error: something broke");
    }

    #[test]
    fn test_json_result_pretty_prints() {
        let result = json_result(&json!({"name": "sessions/abc"}));
        assert!(!result.is_error.unwrap_or(false));
        let text = result_text(&result);
        assert!(text.contains("\"name\": \"sessions/abc\""));
    }

    #[test]
    fn test_api_result_folds_failure_into_envelope() {
        let result = api_result(Err(ApiError::status(404, "not found")));
        assert!(result.is_error.unwrap_or(false));
        let text = result_text(&result);
        assert!(text.starts_with("Error: "));
        assert!(text.contains("404"));
        assert!(text.contains("not found"));
    }

    #[test]
    fn test_api_result_empty_payload_is_success() {
        let result = api_result(Ok(json!({})));
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), "{}");
    }
}
