//! Language codes accepted by the service

/// The 18 language codes the service accepts in `languages`.
pub const SUPPORTED_LANGUAGES: [&str; 18] = [
    "ar", "zh", "cs", "nl", "en", "fr", "de", "hi", "hi-Latn", "id", "it", "ja", "ko", "pl", "pt",
    "ru", "es", "sv",
];

/// Whether `code` is one of [`SUPPORTED_LANGUAGES`]. Codes are case-sensitive.
pub fn is_supported_language(code: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&code)
}
