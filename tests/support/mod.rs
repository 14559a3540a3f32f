//! Shared helpers for the mock API tests
//!
//! - Start a wiremock server and point a client at it
//! - Canonical response fixtures

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use comment_analyzer::{
    AnalyzerClient, AnalyzerConfig, AnalyzerError, HttpInterceptor, HttpRequestContext,
};
use serde_json::json;
use wiremock::MockServer;

pub const ANALYZE_PATH: &str = "/v1alpha1/comments:analyze";
pub const API_KEY: &str = "mock-key";

/// Client pointed at `server`, using the same path as the public endpoint.
pub fn client_for(server: &MockServer) -> AnalyzerClient {
    AnalyzerClient::new(config_for(&server.uri())).expect("valid config")
}

pub fn config_for(base_uri: &str) -> AnalyzerConfig {
    AnalyzerConfig::new(API_KEY).with_endpoint(format!("{base_uri}{ANALYZE_PATH}"))
}

/// Response body for a single TOXICITY score.
pub fn toxicity_response() -> serde_json::Value {
    json!({
        "attributeScores": {
            "TOXICITY": {
                "spanScores": [{
                    "begin": 0,
                    "end": 56,
                    "score": {"value": 0.8728314, "type": "PROBABILITY"}
                }],
                "summaryScore": {"value": 0.8728314, "type": "PROBABILITY"}
            }
        },
        "languages": ["en"],
        "clientToken": ""
    })
}

/// Counts interceptor callbacks; used to assert whether a request went out.
#[derive(Default)]
pub struct CountingInterceptor {
    pub sent: AtomicUsize,
    pub responses: AtomicUsize,
    pub errors: AtomicUsize,
}

impl CountingInterceptor {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> usize {
        self.sent.load(Ordering::SeqCst)
    }

    pub fn responses(&self) -> usize {
        self.responses.load(Ordering::SeqCst)
    }

    pub fn errors(&self) -> usize {
        self.errors.load(Ordering::SeqCst)
    }
}

impl HttpInterceptor for CountingInterceptor {
    fn on_before_send(
        &self,
        _ctx: &HttpRequestContext,
        builder: reqwest::RequestBuilder,
        _body: &serde_json::Value,
    ) -> Result<reqwest::RequestBuilder, AnalyzerError> {
        self.sent.fetch_add(1, Ordering::SeqCst);
        Ok(builder)
    }

    fn on_response(
        &self,
        _ctx: &HttpRequestContext,
        _response: &reqwest::Response,
    ) -> Result<(), AnalyzerError> {
        self.responses.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn on_error(&self, _ctx: &HttpRequestContext, _error: &AnalyzerError) {
        self.errors.fetch_add(1, Ordering::SeqCst);
    }
}

/// Refuses every request before it is sent.
pub struct RejectingInterceptor;

impl HttpInterceptor for RejectingInterceptor {
    fn on_before_send(
        &self,
        _ctx: &HttpRequestContext,
        _builder: reqwest::RequestBuilder,
        _body: &serde_json::Value,
    ) -> Result<reqwest::RequestBuilder, AnalyzerError> {
        Err(AnalyzerError::ConfigurationError(
            "request blocked by policy".to_string(),
        ))
    }
}
