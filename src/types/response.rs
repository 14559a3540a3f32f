//! Response types for the `comments:analyze` method

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::attributes::Attribute;

/// A score value and its type (mirrors the requested `scoreType`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    #[serde(rename = "type")]
    pub r#type: String,
    pub value: f64,
}

/// Score of one span of the comment text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanScore {
    /// Character offset where the span starts
    pub begin: u32,
    /// Character offset where the span ends
    pub end: u32,
    pub score: Score,
}

/// Scores for one attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeScore {
    /// Per-span scores; some attributes never return them
    #[serde(default)]
    pub span_scores: Vec<SpanScore>,
    /// Score for the whole comment
    pub summary_score: Score,
}

/// Body of a successful `comments:analyze` response.
///
/// `attribute_scores` only holds attributes that were requested and cleared
/// their score threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub attribute_scores: IndexMap<Attribute, AttributeScore>,
    /// Languages the service detected or used
    #[serde(default)]
    pub languages: Vec<String>,
    /// Echo of the request's client token; empty when none was sent
    #[serde(default)]
    pub client_token: String,
}

impl AnalyzeResponse {
    pub fn attribute_score(&self, attribute: Attribute) -> Option<&AttributeScore> {
        self.attribute_scores.get(&attribute)
    }

    /// Summary score value for `attribute`, if present.
    pub fn score(&self, attribute: Attribute) -> Option<f64> {
        self.attribute_score(attribute)
            .map(|s| s.summary_score.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
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

    #[test]
    fn test_parse_response() {
        let response: AnalyzeResponse = serde_json::from_value(sample()).unwrap();
        assert_eq!(response.languages, vec!["en"]);
        assert_eq!(response.score(Attribute::Toxicity), Some(0.8728314));
        assert!(response.score(Attribute::Insult).is_none());

        let toxicity = response.attribute_score(Attribute::Toxicity).unwrap();
        assert_eq!(toxicity.span_scores[0].end, 56);
        assert_eq!(serde_json::to_value(&response).unwrap(), sample());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let response: AnalyzeResponse = serde_json::from_value(json!({
            "attributeScores": {
                "SPAM": {"summaryScore": {"value": 0.1, "type": "PROBABILITY"}}
            }
        }))
        .unwrap();
        assert!(response.client_token.is_empty());
        assert!(response.languages.is_empty());
        assert!(response.attribute_scores[&Attribute::Spam].span_scores.is_empty());
    }
}
