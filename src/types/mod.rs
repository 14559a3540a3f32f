//! Types for the Comment Analyzer API
//!
//! - `attributes`: attribute names, families and per-attribute languages
//! - `languages`: the language codes the service accepts
//! - `request` / `response`: wire shapes of `comments:analyze`
//! - `http`: transport settings

pub mod attributes;
pub mod http;
pub mod languages;
pub mod request;
pub mod response;

pub use attributes::{Attribute, AttributeCategory};
pub use http::HttpConfig;
pub use languages::{SUPPORTED_LANGUAGES, is_supported_language};
pub use request::{
    AnalyzeCommentRequest, AttributeSelection, Comment, CommentContext, CommentRequestOptions,
    CommentType, ContextEntry, RequestedAttribute, RequestedAttributes, ScoreType,
};
pub use response::{AnalyzeResponse, AttributeScore, Score, SpanScore};
