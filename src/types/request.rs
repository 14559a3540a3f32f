//! Request types for the `comments:analyze` method
//!
//! Field names follow the service's camelCase JSON schema; unset optional
//! fields are omitted from the body.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::attributes::Attribute;

/// Score type returned for an attribute. Only probabilities exist today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreType {
    /// Scores in the range [0, 1]
    #[default]
    Probability,
}

/// Per-attribute request configuration.
///
/// The empty value (`RequestedAttribute::default()`) asks for default
/// behaviour and is the common choice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestedAttribute {
    /// The service omits scores below this threshold. Must lie in [0, 1].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_type: Option<ScoreType>,
}

impl RequestedAttribute {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_score_threshold(mut self, threshold: f64) -> Self {
        self.score_threshold = Some(threshold);
        self
    }

    pub const fn with_score_type(mut self, score_type: ScoreType) -> Self {
        self.score_type = Some(score_type);
        self
    }
}

/// Attribute map in the shape the service expects. Iteration follows
/// insertion order.
pub type RequestedAttributes = IndexMap<Attribute, RequestedAttribute>;

/// The attributes a caller asks for: plain names, or names with configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeSelection {
    /// Every name maps to a default `RequestedAttribute`
    Names(Vec<Attribute>),
    /// Explicit per-attribute configuration
    Configured(RequestedAttributes),
}

impl From<Vec<Attribute>> for AttributeSelection {
    fn from(names: Vec<Attribute>) -> Self {
        Self::Names(names)
    }
}

impl From<&[Attribute]> for AttributeSelection {
    fn from(names: &[Attribute]) -> Self {
        Self::Names(names.to_vec())
    }
}

impl<const N: usize> From<[Attribute; N]> for AttributeSelection {
    fn from(names: [Attribute; N]) -> Self {
        Self::Names(names.to_vec())
    }
}

impl From<Attribute> for AttributeSelection {
    fn from(name: Attribute) -> Self {
        Self::Names(vec![name])
    }
}

impl From<RequestedAttributes> for AttributeSelection {
    fn from(map: RequestedAttributes) -> Self {
        Self::Configured(map)
    }
}

impl<const N: usize> From<[(Attribute, RequestedAttribute); N]> for AttributeSelection {
    fn from(entries: [(Attribute, RequestedAttribute); N]) -> Self {
        Self::Configured(entries.into_iter().collect())
    }
}

impl FromIterator<(Attribute, RequestedAttribute)> for AttributeSelection {
    fn from_iter<I: IntoIterator<Item = (Attribute, RequestedAttribute)>>(iter: I) -> Self {
        Self::Configured(iter.into_iter().collect())
    }
}

/// Text type of a comment. Only plain text is supported by the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommentType {
    #[default]
    PlainText,
}

/// The comment to score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Raw UTF-8 text of the comment
    pub text: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<CommentType>,
}

impl Comment {
    pub fn plain_text<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            r#type: Some(CommentType::PlainText),
        }
    }
}

/// One entry of surrounding context (e.g. the article a comment replies to).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<CommentType>,
}

impl ContextEntry {
    pub fn plain_text<S: Into<String>>(text: S) -> Self {
        Self {
            text: Some(text.into()),
            r#type: Some(CommentType::PlainText),
        }
    }
}

/// Context for a comment. The service currently accepts but ignores it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentContext {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<ContextEntry>,
}

/// Optional request fields, forwarded to the service as given.
///
/// `languages` is the only field the client inspects: every code must be
/// supported, and an empty list means auto-detection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequestOptions {
    /// Opaque token echoed back in the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    /// Identifier of the community the comment belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<CommentContext>,
    /// Forbid the service from storing the comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_not_store: Option<bool>,
    /// Language codes of the comment; auto-detected when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Ask for per-span scores in addition to the summary score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span_annotations: Option<bool>,
}

impl CommentRequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client_token<S: Into<String>>(mut self, token: S) -> Self {
        self.client_token = Some(token.into());
        self
    }

    pub fn with_community_id<S: Into<String>>(mut self, id: S) -> Self {
        self.community_id = Some(id.into());
        self
    }

    pub fn with_context(mut self, context: CommentContext) -> Self {
        self.context = Some(context);
        self
    }

    pub const fn with_do_not_store(mut self, do_not_store: bool) -> Self {
        self.do_not_store = Some(do_not_store);
        self
    }

    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = Some(languages.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_session_id<S: Into<String>>(mut self, id: S) -> Self {
        self.session_id = Some(id.into());
        self
    }

    pub const fn with_span_annotations(mut self, span_annotations: bool) -> Self {
        self.span_annotations = Some(span_annotations);
        self
    }
}

/// Body of a `comments:analyze` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeCommentRequest {
    pub comment: Comment,
    pub requested_attributes: RequestedAttributes,
    #[serde(flatten)]
    pub options: CommentRequestOptions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_requested_attribute_serialization() {
        let empty = serde_json::to_value(RequestedAttribute::new()).unwrap();
        assert_eq!(empty, json!({}));

        let configured = RequestedAttribute::new()
            .with_score_threshold(0.5)
            .with_score_type(ScoreType::Probability);
        assert_eq!(
            serde_json::to_value(configured).unwrap(),
            json!({"scoreThreshold": 0.5, "scoreType": "PROBABILITY"})
        );
    }

    #[test]
    fn test_request_body_shape() {
        let mut attributes = RequestedAttributes::new();
        attributes.insert(Attribute::Toxicity, RequestedAttribute::new());
        let request = AnalyzeCommentRequest {
            comment: Comment::plain_text("hello"),
            requested_attributes: attributes,
            options: CommentRequestOptions::new()
                .with_do_not_store(true)
                .with_session_id("s-1")
                .with_context(CommentContext {
                    entries: vec![ContextEntry::plain_text("parent")],
                }),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "comment": {"text": "hello", "type": "PLAIN_TEXT"},
                "requestedAttributes": {"TOXICITY": {}},
                "doNotStore": true,
                "sessionId": "s-1",
                "context": {"entries": [{"text": "parent", "type": "PLAIN_TEXT"}]}
            })
        );
    }

    #[test]
    fn test_selection_conversions() {
        let names: AttributeSelection = [Attribute::Toxicity, Attribute::Insult].into();
        assert_eq!(
            names,
            AttributeSelection::Names(vec![Attribute::Toxicity, Attribute::Insult])
        );

        let configured: AttributeSelection =
            [(Attribute::Threat, RequestedAttribute::new().with_score_threshold(0.2))].into();
        match configured {
            AttributeSelection::Configured(map) => {
                assert_eq!(map[&Attribute::Threat].score_threshold, Some(0.2));
            }
            AttributeSelection::Names(_) => panic!("expected configured selection"),
        }
    }
}
