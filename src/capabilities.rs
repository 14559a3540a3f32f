//! Static capability tables
//!
//! Read-only data describing which languages each attribute supports. Built
//! once on first access and shared by every client.

use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::types::Attribute;
pub use crate::types::{SUPPORTED_LANGUAGES, is_supported_language};

static ATTRIBUTE_LANGUAGE_SUPPORT: LazyLock<IndexMap<Attribute, &'static [&'static str]>> =
    LazyLock::new(|| {
        Attribute::ALL
            .iter()
            .map(|a| (*a, a.supported_languages()))
            .collect()
    });

/// Attribute to supported-languages table, in [`Attribute::ALL`] order.
pub fn attribute_language_support() -> &'static IndexMap<Attribute, &'static [&'static str]> {
    &ATTRIBUTE_LANGUAGE_SUPPORT
}

/// Attributes that can score comments written in `code`.
pub fn attributes_for_language(code: &str) -> Vec<Attribute> {
    attribute_language_support()
        .iter()
        .filter(|(_, languages)| languages.contains(&code))
        .map(|(attribute, _)| *attribute)
        .collect()
}
