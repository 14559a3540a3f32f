//! Analyzer Configuration
//!
//! Holds the API key, the endpoint and the HTTP settings needed to build an
//! [`crate::AnalyzerClient`].

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::error::{AnalyzerError, Result};
use crate::types::HttpConfig;

/// The `comments:analyze` endpoint of the Comment Analyzer service.
pub const COMMENT_ANALYZER_URL: &str =
    "https://commentanalyzer.googleapis.com/v1alpha1/comments:analyze";

/// Client configuration.
///
/// # Example
/// ```rust,ignore
/// use comment_analyzer::AnalyzerConfig;
/// use std::time::Duration;
///
/// let config = AnalyzerConfig::new("your-api-key")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// API key, sent as the `key` query parameter (securely stored)
    pub api_key: SecretString,

    /// Full URL of the analyze method
    pub endpoint: String,

    /// HTTP configuration
    pub http_config: HttpConfig,
}

impl AnalyzerConfig {
    /// Create a configuration for the public endpoint.
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            endpoint: COMMENT_ANALYZER_URL.to_string(),
            http_config: HttpConfig::default(),
        }
    }

    /// Point the client at another endpoint (a proxy, or a mock server in tests).
    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_http_config(mut self, http_config: HttpConfig) -> Self {
        self.http_config = http_config;
        self
    }

    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http_config.timeout = Some(timeout);
        self
    }

    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.http_config.connect_timeout = Some(timeout);
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.http_config.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_proxy<S: Into<String>>(mut self, proxy: S) -> Self {
        self.http_config.proxy = Some(proxy.into());
        self
    }

    /// Add a header sent with every request.
    pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.http_config.headers.insert(name.into(), value.into());
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(AnalyzerError::ConfigurationError(
                "Must provide an API key".to_string(),
            ));
        }

        if self.endpoint.is_empty() {
            return Err(AnalyzerError::ConfigurationError(
                "Endpoint cannot be empty".to_string(),
            ));
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(AnalyzerError::ConfigurationError(
                "Endpoint must start with http:// or https://".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}
