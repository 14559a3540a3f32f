//! HTTP Interceptor interfaces
//!
//! Interceptors observe the single request an `analyze` call sends. They can
//! tweak the request builder before send, observe the response, and are
//! notified of transport failures. They never run for input rejected by
//! validation.

use crate::error::AnalyzerError;

/// Context passed to interceptors describing the request.
///
/// `url` is the endpoint without the query string, so the API key never
/// reaches an interceptor.
#[derive(Clone, Debug)]
pub struct HttpRequestContext {
    pub url: String,
}

/// HTTP interceptor trait
pub trait HttpInterceptor: Send + Sync {
    /// Called before sending a request. Return the (possibly modified)
    /// builder or an error to short-circuit the request.
    fn on_before_send(
        &self,
        _ctx: &HttpRequestContext,
        builder: reqwest::RequestBuilder,
        _body: &serde_json::Value,
    ) -> Result<reqwest::RequestBuilder, AnalyzerError> {
        Ok(builder)
    }

    /// Called when a response arrives, whatever its status.
    fn on_response(
        &self,
        _ctx: &HttpRequestContext,
        _response: &reqwest::Response,
    ) -> Result<(), AnalyzerError> {
        Ok(())
    }

    /// Called when the exchange fails after dispatch.
    fn on_error(&self, _ctx: &HttpRequestContext, _error: &AnalyzerError) {}
}

/// A simple logging interceptor backed by `tracing` (no sensitive data).
#[derive(Clone, Debug, Default)]
pub struct LoggingInterceptor;

impl HttpInterceptor for LoggingInterceptor {
    fn on_before_send(
        &self,
        ctx: &HttpRequestContext,
        builder: reqwest::RequestBuilder,
        body: &serde_json::Value,
    ) -> Result<reqwest::RequestBuilder, AnalyzerError> {
        let attributes = body
            .get("requestedAttributes")
            .and_then(|v| v.as_object())
            .map(|m| m.len())
            .unwrap_or_default();
        tracing::debug!(target: "comment_analyzer::http", url=%ctx.url, attributes, "sending request");
        Ok(builder)
    }

    fn on_response(
        &self,
        ctx: &HttpRequestContext,
        response: &reqwest::Response,
    ) -> Result<(), AnalyzerError> {
        tracing::debug!(target: "comment_analyzer::http", url=%ctx.url, status=%response.status().as_u16(), "response received");
        Ok(())
    }

    fn on_error(&self, ctx: &HttpRequestContext, error: &AnalyzerError) {
        tracing::debug!(target: "comment_analyzer::http", url=%ctx.url, err=%error, "request error");
    }
}
