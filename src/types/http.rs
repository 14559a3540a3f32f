//! HTTP transport configuration

use std::collections::HashMap;
use std::time::Duration;

use crate::error::{AnalyzerError, Result};

/// Settings for the `reqwest::Client` the analyzer builds.
///
/// Nothing is set by default: the client imposes no timeout of its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Option<Duration>,
    /// Connection timeout
    pub connect_timeout: Option<Duration>,
    /// Custom headers sent with every request
    pub headers: HashMap<String, String>,
    /// Proxy URL
    pub proxy: Option<String>,
    /// User agent
    pub user_agent: Option<String>,
}

impl HttpConfig {
    /// Build a `reqwest::Client` from these settings.
    pub fn build_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(proxy_url) = &self.proxy {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| {
                AnalyzerError::ConfigurationError(format!("Invalid proxy URL: {e}"))
            })?;
            builder = builder.proxy(proxy);
        }
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        // Default headers
        if !self.headers.is_empty() {
            let mut headers = reqwest::header::HeaderMap::new();
            for (k, v) in &self.headers {
                let name = reqwest::header::HeaderName::from_bytes(k.as_bytes()).map_err(|e| {
                    AnalyzerError::ConfigurationError(format!("Invalid header name '{k}': {e}"))
                })?;
                let value = reqwest::header::HeaderValue::from_str(v).map_err(|e| {
                    AnalyzerError::ConfigurationError(format!("Invalid header value for '{k}': {e}"))
                })?;
                headers.insert(name, value);
            }
            builder = builder.default_headers(headers);
        }

        builder.build().map_err(|e| {
            AnalyzerError::ConfigurationError(format!("Failed to build HTTP client: {e}"))
        })
    }
}
