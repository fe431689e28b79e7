//! HTTP client for the Jules API.
//!
//! Every tool invocation performs exactly one request through this client.
//! The client is built once at startup and shared immutably between
//! concurrent invocations; it holds no per-call state.

use std::time::Duration;

use reqwest::{Client, StatusCode, header};
use serde_json::{Map, Value};
use tracing::debug;

use super::error::{ApiError, ApiResult};
use crate::core::config::JulesConfig;

/// Header carrying the Jules API credential.
const API_KEY_HEADER: &str = "X-Goog-Api-Key";

/// Client for the Jules API.
///
/// Wraps a single `reqwest::Client` carrying the credential and content-type
/// headers on every request, plus a bounded per-request timeout.
#[derive(Debug, Clone)]
pub struct JulesClient {
    http: Client,
    base_url: String,
}

impl JulesClient {
    /// Build a client from the given configuration.
    ///
    /// Fails when the API key is absent or cannot be encoded as a header
    /// value, or when the underlying HTTP client cannot be constructed.
    pub fn new(config: &JulesConfig) -> ApiResult<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .ok_or_else(|| ApiError::configuration("missing Jules API key"))?;

        let mut key_value = header::HeaderValue::from_str(api_key)
            .map_err(|_| ApiError::configuration("API key contains invalid header characters"))?;
        key_value.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert(API_KEY_HEADER, key_value);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform a GET request against a path relative to the base URL.
    ///
    /// Query parameters are appended only when present; an empty slice
    /// produces a request with no query string.
    pub async fn get(&self, path: &str, query: &[(String, String)]) -> ApiResult<Value> {
        let url = self.url(path);
        debug!("GET {}", url);

        let mut request = self.http.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        Self::read_response(request.send().await?).await
    }

    /// Perform a POST request with a JSON body against a path relative to
    /// the base URL.
    pub async fn post(&self, path: &str, body: &Value) -> ApiResult<Value> {
        let url = self.url(path);
        debug!("POST {}", url);

        let response = self.http.post(url).json(body).send().await?;
        Self::read_response(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn read_response(response: reqwest::Response) -> ApiResult<Value> {
        let status = response.status();
        let body = response.text().await?;
        decode_response(status, &body)
    }
}

/// Normalize an upstream response into a success payload or an error.
///
/// - 2xx with an empty body is a valid empty result (`{}`), tolerating
///   upstream operations that return no content on success.
/// - 2xx with a JSON body is passed through verbatim.
/// - 2xx with a malformed body surfaces as a parse error, never as `{}`.
/// - Non-2xx surfaces the status code together with the raw body text.
pub fn decode_response(status: StatusCode, body: &str) -> ApiResult<Value> {
    if !status.is_success() {
        return Err(ApiError::status(status.as_u16(), body));
    }

    if body.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_config() -> JulesConfig {
        JulesConfig {
            api_key: Some("test-key".to_string()),
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_client_requires_api_key() {
        let config = JulesConfig {
            api_key: None,
            ..test_config()
        };
        let result = JulesClient::new(&config);
        assert!(matches!(result, Err(ApiError::Configuration(_))));
    }

    #[test]
    fn test_client_strips_trailing_slash() {
        let config = JulesConfig {
            base_url: "http://127.0.0.1:9/v1alpha/".to_string(),
            ..test_config()
        };
        let client = JulesClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9/v1alpha");
        assert_eq!(client.url("sessions"), "http://127.0.0.1:9/v1alpha/sessions");
        assert_eq!(
            client.url("/sources/github/o/r"),
            "http://127.0.0.1:9/v1alpha/sources/github/o/r"
        );
    }

    #[test]
    fn test_decode_response_success() {
        let result = decode_response(StatusCode::OK, r#"{"name":"sessions/abc"}"#).unwrap();
        assert_eq!(result, json!({"name": "sessions/abc"}));
    }

    #[test]
    fn test_decode_response_empty_body_is_empty_object() {
        assert_eq!(decode_response(StatusCode::OK, "").unwrap(), json!({}));
        assert_eq!(decode_response(StatusCode::OK, "  \n").unwrap(), json!({}));
    }

    #[test]
    fn test_decode_response_failure_carries_status_and_body() {
        let err = decode_response(StatusCode::NOT_FOUND, "not found").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("not found"));
    }

    #[test]
    fn test_decode_response_malformed_json_is_an_error() {
        let err = decode_response(StatusCode::OK, "{not json").unwrap_err();
        assert!(matches!(err, ApiError::InvalidJson(_)));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_surfaces_network_error() {
        // Port 9 (discard) is not listening; the connection is refused.
        let client = JulesClient::new(&test_config()).unwrap();
        let err = client.get("sources", &[]).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
