//! Core error types for the Comment Analyzer client.

use thiserror::Error;

use crate::types::Attribute;
use crate::validation::MAX_LENGTH;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Errors produced by the Comment Analyzer client.
///
/// Every variant except `Response` and `Unknown` is raised before any request
/// is sent.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Missing or invalid client configuration (e.g. an empty API key)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The comment text is empty
    #[error("text must not be empty")]
    TextEmpty,

    /// The comment text is longer than [`MAX_LENGTH`] characters
    #[error("text must not be greater than {limit} characters in length", limit = MAX_LENGTH)]
    TextTooLong {
        /// Length of the rejected text, in UTF-16 code units
        length: usize,
    },

    /// A requested attribute is malformed (threshold out of range, unknown name)
    #[error("{0}")]
    InvalidAttribute(String),

    /// A requested language code is not supported by the service
    #[error("language {0} is not supported")]
    UnsupportedLanguage(String),

    /// A language is valid but not available for a specific attribute
    #[error("language {language} is not supported for attribute {attribute}")]
    UnsupportedAttributeLanguage {
        /// The attribute that lacks support
        attribute: Attribute,
        /// The offending language code
        language: String,
    },

    /// The transport reported a failure (non-2xx status, network error, timeout)
    #[error(transparent)]
    Response(ResponseError),

    /// Anything else; logged when raised
    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Discriminant of [`AnalyzerError`], for callers that branch on the kind only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Configuration,
    TextEmpty,
    TextTooLong,
    InvalidAttribute,
    UnsupportedLanguage,
    UnsupportedAttributeLanguage,
    Response,
    Unknown,
}

impl AnalyzerError {
    /// Create an invalid attribute error.
    pub fn invalid_attribute<S: Into<String>>(message: S) -> Self {
        Self::InvalidAttribute(message.into())
    }

    /// Create an unsupported language error for `code`.
    pub fn unsupported_language<S: Into<String>>(code: S) -> Self {
        Self::UnsupportedLanguage(code.into())
    }

    /// The kind of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigurationError(_) => ErrorKind::Configuration,
            Self::TextEmpty => ErrorKind::TextEmpty,
            Self::TextTooLong { .. } => ErrorKind::TextTooLong,
            Self::InvalidAttribute(_) => ErrorKind::InvalidAttribute,
            Self::UnsupportedLanguage(_) => ErrorKind::UnsupportedLanguage,
            Self::UnsupportedAttributeLanguage { .. } => ErrorKind::UnsupportedAttributeLanguage,
            Self::Response(_) => ErrorKind::Response,
            Self::Unknown(_) => ErrorKind::Unknown,
        }
    }

    /// Whether the error was raised locally, before dispatch, and can be
    /// corrected by the caller.
    pub const fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::TextEmpty
                | Self::TextTooLong { .. }
                | Self::InvalidAttribute(_)
                | Self::UnsupportedLanguage(_)
                | Self::UnsupportedAttributeLanguage { .. }
        )
    }

    /// HTTP status code, if the service answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response(err) => err.status(),
            _ => None,
        }
    }

    /// The wrapped transport error, if this is a `Response` error.
    pub const fn as_response_error(&self) -> Option<&ResponseError> {
        match self {
            Self::Response(err) => Some(err),
            _ => None,
        }
    }

    /// Parsed JSON body of the failed response, when there is one.
    pub fn response_body(&self) -> Option<serde_json::Value> {
        self.as_response_error().and_then(ResponseError::body_json)
    }
}

/// A failed exchange with the service.
///
/// Keeps what the transport reported: the status (when a response arrived),
/// the raw body, and the underlying `reqwest::Error` as [`std::error::Error::source`].
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ResponseError {
    message: String,
    status: Option<u16>,
    body: Option<String>,
    #[source]
    source: Option<reqwest::Error>,
}

impl ResponseError {
    /// Wrap a transport error that happened without a readable response.
    pub fn from_transport(err: reqwest::Error) -> Self {
        Self {
            message: err.to_string(),
            status: err.status().map(|s| s.as_u16()),
            body: None,
            source: Some(err),
        }
    }

    /// Build from a non-success status and the response body.
    ///
    /// The message is the service's `error.message` when the body carries
    /// one, otherwise a generic status line.
    pub fn from_status(status: u16, body: String) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| format!("Request failed with status code {status}"));
        Self {
            message,
            status: Some(status),
            body: Some(body),
            source: None,
        }
    }

    /// Attach the transport-level error for this response.
    pub fn with_source(mut self, source: reqwest::Error) -> Self {
        self.source = Some(source);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    /// Raw response body text.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Response body parsed as JSON; `None` if absent or not JSON.
    pub fn body_json(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|b| serde_json::from_str(b).ok())
    }

    /// The underlying transport error.
    pub const fn transport_error(&self) -> Option<&reqwest::Error> {
        self.source.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_too_long_message_states_limit() {
        let err = AnalyzerError::TextTooLong { length: 20481 };
        assert!(err.to_string().contains("20480"));
        assert_eq!(err.kind(), ErrorKind::TextTooLong);
    }

    #[test]
    fn test_unsupported_language_names_code() {
        let err = AnalyzerError::unsupported_language("xx");
        assert_eq!(err.to_string(), "language xx is not supported");
    }

    #[test]
    fn test_validation_classification() {
        assert!(AnalyzerError::TextEmpty.is_validation_error());
        assert!(AnalyzerError::invalid_attribute("bad").is_validation_error());
        assert!(!AnalyzerError::ConfigurationError("x".into()).is_validation_error());
        assert!(!AnalyzerError::Unknown("x".into()).is_validation_error());
    }

    #[test]
    fn test_response_error_uses_service_message() {
        let body = json!({"error": {"message": "invalid!"}}).to_string();
        let err = ResponseError::from_status(400, body);
        assert_eq!(err.message(), "invalid!");
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.body_json(), Some(json!({"error": {"message": "invalid!"}})));
    }

    #[test]
    fn test_response_error_without_message() {
        let err = ResponseError::from_status(400, json!({"error": {"code": 400}}).to_string());
        assert_eq!(err.message(), "Request failed with status code 400");

        let err = ResponseError::from_status(502, "<html>bad gateway</html>".to_string());
        assert_eq!(err.body(), Some("<html>bad gateway</html>"));
        assert!(err.body_json().is_none());
    }

    #[test]
    fn test_response_body_accessor() {
        let err = AnalyzerError::Response(ResponseError::from_status(
            429,
            json!({"error": {"message": "quota"}}).to_string(),
        ));
        assert_eq!(err.status_code(), Some(429));
        assert_eq!(err.to_string(), "quota");
        assert_eq!(
            err.response_body(),
            Some(json!({"error": {"message": "quota"}}))
        );
        assert!(AnalyzerError::TextEmpty.response_body().is_none());
    }
}
