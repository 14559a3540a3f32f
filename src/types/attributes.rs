//! Attribute names and their language support
//!
//! An attribute is a scoring dimension the service evaluates a comment
//! against (`TOXICITY`, `INSULT`, ...). Attributes come in four families:
//!
//! - **Production**: tested across domains, multilingual.
//! - **Experimental**: English only; may be retired once promoted.
//! - **Bridging**: experimental classifiers for constructive discourse.
//! - **New York Times**: trained on a single comment source.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::languages::SUPPORTED_LANGUAGES;
use crate::error::AnalyzerError;

const ALL_LANGUAGES: &[&str] = &SUPPORTED_LANGUAGES;

/// Languages of the production attributes other than `IDENTITY_ATTACK`.
const PRODUCTION_LANGUAGES: &[&str] = &[
    "ar", "zh", "cs", "nl", "en", "fr", "hi", "hi-Latn", "id", "it", "ja", "ko", "pl", "pt", "ru",
    "sv",
];

const ENGLISH_ONLY: &[&str] = &["en"];

/// Attribute family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeCategory {
    Production,
    Experimental,
    Bridging,
    NewYorkTimes,
}

/// A scoring attribute understood by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Attribute {
    // Production
    /// Negative or hateful comments targeting someone because of their identity.
    IdentityAttack,
    /// Insulting, inflammatory, or negative comment towards a person or group.
    Insult,
    /// Swear words, curse words, or other obscene or profane language.
    Profanity,
    /// A very hateful, aggressive, disrespectful comment.
    SevereToxicity,
    /// An intention to inflict pain, injury, or violence.
    Threat,
    /// A rude, disrespectful, or unreasonable comment.
    Toxicity,

    // Experimental
    Flirtation,
    IdentityAttackExperimental,
    InsultExperimental,
    ProfanityExperimental,
    SevereToxicityExperimental,
    SexuallyExplicit,
    ThreatExperimental,
    ToxicityExperimental,

    // Bridging
    AffinityExperimental,
    CompassionExperimental,
    CuriosityExperimental,
    NuanceExperimental,
    PersonalStoryExperimental,
    ReasoningExperimental,
    RespectExperimental,

    // New York Times
    AttackOnAuthor,
    AttackOnCommenter,
    Incoherent,
    Inflammatory,
    LikelyToReject,
    Obscene,
    Spam,
    Unsubstantial,
}

impl Attribute {
    /// All attributes, production first.
    pub const ALL: [Self; 29] = [
        Self::IdentityAttack,
        Self::Insult,
        Self::Profanity,
        Self::SevereToxicity,
        Self::Threat,
        Self::Toxicity,
        Self::Flirtation,
        Self::IdentityAttackExperimental,
        Self::InsultExperimental,
        Self::ProfanityExperimental,
        Self::SevereToxicityExperimental,
        Self::SexuallyExplicit,
        Self::ThreatExperimental,
        Self::ToxicityExperimental,
        Self::AffinityExperimental,
        Self::CompassionExperimental,
        Self::CuriosityExperimental,
        Self::NuanceExperimental,
        Self::PersonalStoryExperimental,
        Self::ReasoningExperimental,
        Self::RespectExperimental,
        Self::AttackOnAuthor,
        Self::AttackOnCommenter,
        Self::Incoherent,
        Self::Inflammatory,
        Self::LikelyToReject,
        Self::Obscene,
        Self::Spam,
        Self::Unsubstantial,
    ];

    /// Wire name of the attribute.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IdentityAttack => "IDENTITY_ATTACK",
            Self::Insult => "INSULT",
            Self::Profanity => "PROFANITY",
            Self::SevereToxicity => "SEVERE_TOXICITY",
            Self::Threat => "THREAT",
            Self::Toxicity => "TOXICITY",
            Self::Flirtation => "FLIRTATION",
            Self::IdentityAttackExperimental => "IDENTITY_ATTACK_EXPERIMENTAL",
            Self::InsultExperimental => "INSULT_EXPERIMENTAL",
            Self::ProfanityExperimental => "PROFANITY_EXPERIMENTAL",
            Self::SevereToxicityExperimental => "SEVERE_TOXICITY_EXPERIMENTAL",
            Self::SexuallyExplicit => "SEXUALLY_EXPLICIT",
            Self::ThreatExperimental => "THREAT_EXPERIMENTAL",
            Self::ToxicityExperimental => "TOXICITY_EXPERIMENTAL",
            Self::AffinityExperimental => "AFFINITY_EXPERIMENTAL",
            Self::CompassionExperimental => "COMPASSION_EXPERIMENTAL",
            Self::CuriosityExperimental => "CURIOSITY_EXPERIMENTAL",
            Self::NuanceExperimental => "NUANCE_EXPERIMENTAL",
            Self::PersonalStoryExperimental => "PERSONAL_STORY_EXPERIMENTAL",
            Self::ReasoningExperimental => "REASONING_EXPERIMENTAL",
            Self::RespectExperimental => "RESPECT_EXPERIMENTAL",
            Self::AttackOnAuthor => "ATTACK_ON_AUTHOR",
            Self::AttackOnCommenter => "ATTACK_ON_COMMENTER",
            Self::Incoherent => "INCOHERENT",
            Self::Inflammatory => "INFLAMMATORY",
            Self::LikelyToReject => "LIKELY_TO_REJECT",
            Self::Obscene => "OBSCENE",
            Self::Spam => "SPAM",
            Self::Unsubstantial => "UNSUBSTANTIAL",
        }
    }

    pub const fn category(&self) -> AttributeCategory {
        match self {
            Self::IdentityAttack
            | Self::Insult
            | Self::Profanity
            | Self::SevereToxicity
            | Self::Threat
            | Self::Toxicity => AttributeCategory::Production,
            Self::Flirtation
            | Self::IdentityAttackExperimental
            | Self::InsultExperimental
            | Self::ProfanityExperimental
            | Self::SevereToxicityExperimental
            | Self::SexuallyExplicit
            | Self::ThreatExperimental
            | Self::ToxicityExperimental => AttributeCategory::Experimental,
            Self::AffinityExperimental
            | Self::CompassionExperimental
            | Self::CuriosityExperimental
            | Self::NuanceExperimental
            | Self::PersonalStoryExperimental
            | Self::ReasoningExperimental
            | Self::RespectExperimental => AttributeCategory::Bridging,
            Self::AttackOnAuthor
            | Self::AttackOnCommenter
            | Self::Incoherent
            | Self::Inflammatory
            | Self::LikelyToReject
            | Self::Obscene
            | Self::Spam
            | Self::Unsubstantial => AttributeCategory::NewYorkTimes,
        }
    }

    /// Language codes this attribute can score.
    pub const fn supported_languages(&self) -> &'static [&'static str] {
        match self {
            Self::IdentityAttack => ALL_LANGUAGES,
            Self::Insult
            | Self::Profanity
            | Self::SevereToxicity
            | Self::Threat
            | Self::Toxicity => PRODUCTION_LANGUAGES,
            _ => ENGLISH_ONLY,
        }
    }

    pub fn supports_language(&self, code: &str) -> bool {
        self.supported_languages().contains(&code)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| AnalyzerError::invalid_attribute(format!("unknown attribute {s}")))
    }
}
