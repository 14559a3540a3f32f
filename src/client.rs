//! Comment Analyzer client
//!
//! [`AnalyzerClient::analyze`] runs a fixed sequence:
//!
//! 1. normalize the requested attributes
//! 2. build the request body (plain-text comment, attributes, options)
//! 3. validate the comment text
//! 4. validate explicit languages, if any
//! 5. POST the body with the API key as the `key` query parameter
//! 6. decode the response, or map the failure to an [`AnalyzerError`]
//!
//! Steps 1-4 fail before anything is sent. No retries are made.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::config::AnalyzerConfig;
use crate::error::{AnalyzerError, ResponseError, Result};
use crate::traits::CommentAnalysisCapability;
use crate::types::{
    AnalyzeCommentRequest, AnalyzeResponse, AttributeSelection, Comment, CommentRequestOptions,
};
use crate::utils::http_interceptor::{HttpInterceptor, HttpRequestContext};
use crate::validation::{normalize_attributes, validate_comment, validate_languages};

/// Client for the Comment Analyzer `comments:analyze` method.
///
/// Cheap to clone; clones share the HTTP connection pool. Safe to use from
/// many tasks at once since nothing is mutated after construction.
#[derive(Clone)]
pub struct AnalyzerClient {
    config: AnalyzerConfig,
    http_client: reqwest::Client,
    interceptors: Vec<Arc<dyn HttpInterceptor>>,
}

impl fmt::Debug for AnalyzerClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyzerClient")
            .field("config", &self.config)
            .field("interceptors", &self.interceptors.len())
            .finish()
    }
}

impl AnalyzerClient {
    /// Create a client, building the HTTP transport from `config.http_config`.
    ///
    /// Fails with `ConfigurationError` if the API key is missing. No request
    /// is made.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        let http_client = config.http_config.build_client()?;
        Ok(Self::from_parts(config, http_client))
    }

    /// Create a client for the public endpoint from an API key alone.
    pub fn from_api_key<S: Into<String>>(api_key: S) -> Result<Self> {
        Self::new(AnalyzerConfig::new(api_key))
    }

    /// Create a client that sends through a caller-built `reqwest::Client`.
    ///
    /// `config.http_config` is ignored.
    pub fn with_http_client(config: AnalyzerConfig, http_client: reqwest::Client) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, http_client))
    }

    fn from_parts(config: AnalyzerConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
            interceptors: Vec::new(),
        }
    }

    /// Install an HTTP interceptor. Interceptors run in installation order.
    pub fn with_interceptor(mut self, interceptor: Arc<dyn HttpInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    pub const fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Score `text` against the requested attributes (`TOXICITY` if none).
    pub async fn analyze(
        &self,
        text: &str,
        attributes: Option<AttributeSelection>,
        options: Option<CommentRequestOptions>,
    ) -> Result<AnalyzeResponse> {
        let request = self.build_request(text, attributes, options)?;
        self.send(&request).await
    }

    /// Validate the input and build the request body `analyze` would send.
    pub fn build_request(
        &self,
        text: &str,
        attributes: Option<AttributeSelection>,
        options: Option<CommentRequestOptions>,
    ) -> Result<AnalyzeCommentRequest> {
        let requested_attributes = normalize_attributes(attributes)?;
        let mut request = AnalyzeCommentRequest {
            comment: Comment::plain_text(text),
            requested_attributes,
            options: options.unwrap_or_default(),
        };

        validate_comment(text)?;

        if let Some(languages) = request.options.languages.take() {
            validate_languages(&languages)?;
            // An empty list means auto-detect: leave the field out.
            if !languages.is_empty() {
                request.options.languages = Some(languages);
            }
        }

        Ok(request)
    }

    async fn send(&self, request: &AnalyzeCommentRequest) -> Result<AnalyzeResponse> {
        let ctx = HttpRequestContext {
            url: self.config.endpoint.clone(),
        };
        // Interceptors get a `Value` view; the wire body is serialized from
        // `request` so attribute order is kept.
        let body = serde_json::to_value(request)
            .map_err(|e| unknown_error(format!("failed to encode request: {e}")))?;

        let mut builder = self
            .http_client
            .post(&self.config.endpoint)
            .query(&[("key", self.config.api_key.expose_secret())])
            .json(request);
        for interceptor in &self.interceptors {
            builder = match interceptor.on_before_send(&ctx, builder, &body) {
                Ok(builder) => builder,
                Err(e) => return Err(self.fail(&ctx, e)),
            };
        }

        tracing::debug!(
            target: "comment_analyzer::http",
            url = %ctx.url,
            attributes = request.requested_attributes.len(),
            "dispatching analyze request"
        );

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => return Err(self.fail(&ctx, AnalyzerError::from(e))),
        };
        for interceptor in &self.interceptors {
            interceptor.on_response(&ctx, &response)?;
        }

        let status = response.status();
        if !status.is_success() {
            let transport = response.error_for_status_ref().err();
            let text = match response.text().await {
                Ok(text) => text,
                Err(e) => return Err(self.fail(&ctx, AnalyzerError::from(e))),
            };
            let mut error = ResponseError::from_status(status.as_u16(), text);
            if let Some(transport) = transport {
                error = error.with_source(transport);
            }
            return Err(self.fail(&ctx, AnalyzerError::Response(error)));
        }

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => return Err(self.fail(&ctx, AnalyzerError::from(e))),
        };
        serde_json::from_slice::<AnalyzeResponse>(&bytes).map_err(|e| {
            let error = unknown_error(format!("failed to decode response: {e}"));
            self.notify_error(&ctx, &error);
            error
        })
    }

    fn fail(&self, ctx: &HttpRequestContext, error: AnalyzerError) -> AnalyzerError {
        tracing::warn!(
            target: "comment_analyzer::http",
            url = %ctx.url,
            status = ?error.status_code(),
            err = %error,
            "analyze request failed"
        );
        self.notify_error(ctx, &error);
        error
    }

    fn notify_error(&self, ctx: &HttpRequestContext, error: &AnalyzerError) {
        for interceptor in &self.interceptors {
            interceptor.on_error(ctx, error);
        }
    }
}

fn unknown_error(message: String) -> AnalyzerError {
    tracing::error!(target: "comment_analyzer::http", "Unknown error: {message}");
    AnalyzerError::Unknown(message)
}

#[async_trait]
impl CommentAnalysisCapability for AnalyzerClient {
    async fn analyze_comment(
        &self,
        text: &str,
        attributes: Option<AttributeSelection>,
        options: Option<CommentRequestOptions>,
    ) -> Result<AnalyzeResponse> {
        self.analyze(text, attributes, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::types::{Attribute, RequestedAttribute};
    use serde_json::json;
    use tracing_test::traced_test;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> AnalyzerClient {
        AnalyzerClient::from_api_key("mock-key").unwrap()
    }

    #[test]
    fn test_new_requires_api_key() {
        let err = AnalyzerClient::new(AnalyzerConfig::new("")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        let with_client =
            AnalyzerClient::with_http_client(AnalyzerConfig::new(""), reqwest::Client::new());
        assert!(with_client.is_err());
    }

    #[test]
    fn test_debug_hides_api_key() {
        let debug = format!("{:?}", AnalyzerClient::from_api_key("very-secret").unwrap());
        assert!(!debug.contains("very-secret"));
    }

    #[test]
    fn test_build_request_body() {
        let request = client()
            .build_request(
                "testing is for dummies",
                Some([(Attribute::Toxicity, RequestedAttribute::new())].into()),
                Some(CommentRequestOptions::new().with_client_token("abc")),
            )
            .unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "comment": {"text": "testing is for dummies", "type": "PLAIN_TEXT"},
                "requestedAttributes": {"TOXICITY": {}},
                "clientToken": "abc"
            })
        );
    }

    #[test]
    fn test_build_request_drops_empty_languages() {
        let request = client()
            .build_request(
                "hello",
                None,
                Some(CommentRequestOptions::new().with_languages(Vec::<String>::new())),
            )
            .unwrap();
        assert!(request.options.languages.is_none());
        assert!(serde_json::to_value(&request).unwrap().get("languages").is_none());
    }

    #[test]
    fn test_build_request_error_order() {
        // Attribute errors come before text errors, text errors before language errors.
        let bad_threshold: Option<AttributeSelection> = Some(
            [(Attribute::Toxicity, RequestedAttribute::new().with_score_threshold(2.0))].into(),
        );
        let bad_languages = Some(CommentRequestOptions::new().with_languages(["xx"]));

        let err = client()
            .build_request("", bad_threshold, bad_languages.clone())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAttribute);

        let err = client().build_request("", None, bad_languages).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TextEmpty);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_undecodable_success_body_is_unknown_and_logged() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1alpha1/comments:analyze"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .expect(1)
            .mount(&server)
            .await;

        let config = AnalyzerConfig::new("mock-key")
            .with_endpoint(format!("{}/v1alpha1/comments:analyze", server.uri()));
        let client = AnalyzerClient::new(config).unwrap();

        let err = client.analyze("hello", None, None).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unknown);
        assert!(logs_contain("failed to decode response"));
    }
}
