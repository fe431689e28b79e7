//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default base URL for the Jules API.
pub const DEFAULT_BASE_URL: &str = "https://jules.googleapis.com/v1alpha";

/// Default per-request timeout in seconds for upstream calls.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream Jules API configuration.
    pub jules: JulesConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the upstream Jules API.
#[derive(Clone, Serialize, Deserialize)]
pub struct JulesConfig {
    /// API key used to authenticate against the Jules API.
    /// Sent as the `X-Goog-Api-Key` header on every request.
    pub api_key: Option<String>,

    /// Base URL of the Jules API, without a trailing slash.
    pub base_url: String,

    /// Per-request timeout in seconds. A hung upstream call is aborted after
    /// this interval instead of hanging the invocation forever.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for JulesConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JulesConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for JulesConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "jules-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            jules: JulesConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// The Jules credential is read from `JULES_API_KEY`; server-level
    /// settings use the `MCP_` prefix (e.g. `MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        // Load the Jules API key. Absence is reported here but enforced at
        // startup in main, before any protocol traffic is accepted.
        if let Ok(api_key) = std::env::var("JULES_API_KEY") {
            config.jules.api_key = Some(api_key);
            info!("Jules API key loaded from environment");
        } else {
            warn!("JULES_API_KEY not set - the server will refuse to start");
        }

        if let Ok(base_url) = std::env::var("JULES_API_BASE_URL") {
            config.jules.base_url = base_url.trim_end_matches('/').to_string();
            info!("Jules API base URL overridden: {}", config.jules.base_url);
        }

        if let Ok(raw) = std::env::var("JULES_HTTP_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config.jules.timeout_secs = secs,
                _ => warn!(
                    "Invalid JULES_HTTP_TIMEOUT_SECS value {:?}, keeping default of {}s",
                    raw, config.jules.timeout_secs
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_api_key_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("JULES_API_KEY", "test_key_12345");
        }
        let config = Config::from_env();
        assert_eq!(config.jules.api_key.as_deref(), Some("test_key_12345"));
        unsafe {
            std::env::remove_var("JULES_API_KEY");
        }
    }

    #[test]
    fn test_api_key_absent_by_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("JULES_API_KEY");
        }
        let config = Config::from_env();
        assert!(config.jules.api_key.is_none());
    }

    #[test]
    fn test_base_url_default_and_override() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("JULES_API_BASE_URL");
        }
        let config = Config::from_env();
        assert_eq!(config.jules.base_url, DEFAULT_BASE_URL);

        unsafe {
            std::env::set_var("JULES_API_BASE_URL", "http://localhost:8080/v1alpha/");
        }
        let config = Config::from_env();
        assert_eq!(config.jules.base_url, "http://localhost:8080/v1alpha");
        unsafe {
            std::env::remove_var("JULES_API_BASE_URL");
        }
    }

    #[test]
    fn test_timeout_invalid_falls_back() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("JULES_HTTP_TIMEOUT_SECS", "not-a-number");
        }
        let config = Config::from_env();
        assert_eq!(config.jules.timeout_secs, DEFAULT_TIMEOUT_SECS);
        unsafe {
            std::env::remove_var("JULES_HTTP_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let jules = JulesConfig {
            api_key: Some("super_secret_key".to_string()),
            ..JulesConfig::default()
        };
        let debug_str = format!("{:?}", jules);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }
}
