//! Input validation and attribute normalization
//!
//! Every check here is pure and runs before a request is sent, so invalid
//! input never reaches the network.

use crate::error::{AnalyzerError, Result};
use crate::types::{
    Attribute, AttributeSelection, RequestedAttribute, RequestedAttributes, is_supported_language,
};

/// Maximum comment length, in characters.
pub const MAX_LENGTH: usize = 20480;

/// Attribute requested when the caller names none.
pub const DEFAULT_ATTRIBUTE: Attribute = Attribute::Toxicity;

/// Check that `text` is non-empty and at most [`MAX_LENGTH`] characters long.
///
/// Length is measured in UTF-16 code units, so a character outside the Basic
/// Multilingual Plane (most emoji) counts as two.
pub fn validate_comment(text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(AnalyzerError::TextEmpty);
    }
    let length = text.encode_utf16().count();
    if length > MAX_LENGTH {
        return Err(AnalyzerError::TextTooLong { length });
    }
    Ok(())
}

/// Check every code against the supported language set.
///
/// Stops at the first unsupported code. An empty slice is valid and means
/// auto-detection.
pub fn validate_languages<S: AsRef<str>>(languages: &[S]) -> Result<()> {
    match languages
        .iter()
        .map(AsRef::as_ref)
        .find(|code| !is_supported_language(code))
    {
        Some(code) => Err(AnalyzerError::unsupported_language(code)),
        None => Ok(()),
    }
}

/// Turn a caller's attribute selection into the map the service expects.
///
/// Names map to default configuration (duplicates collapse). Configured
/// entries are returned as given once every present `score_threshold` is
/// checked to lie in [0, 1]. No selection, or an empty one, yields
/// `{TOXICITY: {}}`.
pub fn normalize_attributes(attributes: Option<AttributeSelection>) -> Result<RequestedAttributes> {
    let normalized = match attributes {
        None => RequestedAttributes::new(),
        Some(AttributeSelection::Names(names)) => names
            .into_iter()
            .map(|name| (name, RequestedAttribute::default()))
            .collect(),
        Some(AttributeSelection::Configured(map)) => {
            for (attribute, config) in &map {
                validate_requested_attribute(*attribute, config)?;
            }
            map
        }
    };

    if normalized.is_empty() {
        let mut default = RequestedAttributes::new();
        default.insert(DEFAULT_ATTRIBUTE, RequestedAttribute::default());
        return Ok(default);
    }
    Ok(normalized)
}

fn validate_requested_attribute(attribute: Attribute, config: &RequestedAttribute) -> Result<()> {
    if let Some(threshold) = config.score_threshold
        && !(0.0..=1.0).contains(&threshold)
    {
        return Err(AnalyzerError::invalid_attribute(format!(
            "scoreThreshold must be between 0 and 1 (got {threshold} for {attribute})"
        )));
    }
    Ok(())
}

/// Check that every requested language is supported by every requested
/// attribute.
///
/// Pairs are visited attribute by attribute, then language by language, in
/// the order given; the first incompatible pair is reported. [`crate::AnalyzerClient::analyze`]
/// does not run this check.
pub fn validate_attribute_language_compatibility<A, S>(attributes: A, languages: &[S]) -> Result<()>
where
    A: IntoIterator<Item = Attribute>,
    S: AsRef<str>,
{
    for attribute in attributes {
        if let Some(language) = languages
            .iter()
            .map(AsRef::as_ref)
            .find(|code| !attribute.supports_language(code))
        {
            return Err(AnalyzerError::UnsupportedAttributeLanguage {
                attribute,
                language: language.to_string(),
            });
        }
    }
    Ok(())
}
