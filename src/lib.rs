//! # comment-analyzer - A typed client for the Comment Analyzer API
//!
//! Scores comment text against attributes such as `TOXICITY` or `INSULT`
//! using the Comment Analyzer (Perspective) `comments:analyze` method.
#![deny(unsafe_code)]

//! ## Features
//!
//! - **Validation First**: empty or oversized text, out-of-range thresholds and
//!   unsupported languages are rejected before any request is sent.
//! - **Typed Capability Tables**: every attribute and the languages it supports.
//! - **Typed Errors**: one error enum with a `kind()` to branch on; transport
//!   failures keep the status, body and underlying `reqwest` error.
//! - **HTTP Customization**: timeouts, proxy, headers, interceptors, or a
//!   caller-built `reqwest::Client`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use comment_analyzer::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AnalyzerClient::new(AnalyzerConfig::new("your-api-key"))?;
//!
//!     let response = client
//!         .analyze(
//!             "You are a wonderful person",
//!             Some(vec![Attribute::Toxicity, Attribute::Insult].into()),
//!             Some(CommentRequestOptions::new().with_languages(["en"])),
//!         )
//!         .await?;
//!
//!     if let Some(score) = response.score(Attribute::Toxicity) {
//!         println!("toxicity: {score:.3}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use comment_analyzer::prelude::*;
//!
//! # async fn run(client: AnalyzerClient) {
//! match client.analyze("", None, None).await {
//!     Ok(response) => println!("{response:?}"),
//!     Err(e) => match e.kind() {
//!         ErrorKind::TextEmpty | ErrorKind::TextTooLong => eprintln!("fix the text: {e}"),
//!         ErrorKind::Response => eprintln!("service error {:?}: {e}", e.status_code()),
//!         _ => eprintln!("{e}"),
//!     },
//! }
//! # }
//! ```

pub mod capabilities;
pub mod client;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod traits;
pub mod types;
pub mod utils;
pub mod validation;

pub use capabilities::{attribute_language_support, attributes_for_language};
pub use client::AnalyzerClient;
pub use config::{AnalyzerConfig, COMMENT_ANALYZER_URL};
pub use error::{AnalyzerError, ErrorKind, ResponseError, Result};
pub use traits::CommentAnalysisCapability;
pub use types::*;
pub use utils::http_interceptor::{HttpInterceptor, HttpRequestContext, LoggingInterceptor};
pub use validation::{
    DEFAULT_ATTRIBUTE, MAX_LENGTH, normalize_attributes, validate_attribute_language_compatibility,
    validate_comment, validate_languages,
};

/// Convenient imports for common use.
pub mod prelude {
    pub use crate::client::AnalyzerClient;
    pub use crate::config::AnalyzerConfig;
    pub use crate::error::{AnalyzerError, ErrorKind};
    pub use crate::traits::CommentAnalysisCapability;
    pub use crate::types::{
        AnalyzeResponse, Attribute, AttributeSelection, CommentRequestOptions, RequestedAttribute,
        ScoreType,
    };
    pub use crate::validation::MAX_LENGTH;
}
