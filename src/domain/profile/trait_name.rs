//! The ten personality traits scored by a profile.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the ten personality dimensions: the Big Five plus five value scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitName {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    EmotionalRange,
    Conversation,
    OpennessToChange,
    Hedonism,
    SelfEnhancement,
    SelfTranscendence,
}

impl TraitName {
    /// All traits in presentation order.
    pub const ALL: [TraitName; 10] = [
        TraitName::Openness,
        TraitName::Conscientiousness,
        TraitName::Extraversion,
        TraitName::Agreeableness,
        TraitName::EmotionalRange,
        TraitName::Conversation,
        TraitName::OpennessToChange,
        TraitName::Hedonism,
        TraitName::SelfEnhancement,
        TraitName::SelfTranscendence,
    ];

    /// Key used for this trait in the request body.
    pub fn as_str(&self) -> &'static str {
        match self {
            TraitName::Openness => "openness",
            TraitName::Conscientiousness => "conscientiousness",
            TraitName::Extraversion => "extraversion",
            TraitName::Agreeableness => "agreeableness",
            TraitName::EmotionalRange => "emotional_range",
            TraitName::Conversation => "conversation",
            TraitName::OpennessToChange => "openness_to_change",
            TraitName::Hedonism => "hedonism",
            TraitName::SelfEnhancement => "self_enhancement",
            TraitName::SelfTranscendence => "self_transcendence",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            TraitName::Openness => "Openness",
            TraitName::Conscientiousness => "Conscientiousness",
            TraitName::Extraversion => "Extraversion",
            TraitName::Agreeableness => "Agreeableness",
            TraitName::EmotionalRange => "Emotional Range",
            TraitName::Conversation => "Conversation",
            TraitName::OpennessToChange => "Openness to Change",
            TraitName::Hedonism => "Hedonism",
            TraitName::SelfEnhancement => "Self Enhancement",
            TraitName::SelfTranscendence => "Self Transcendence",
        }
    }

    /// One-line description shown next to the trait's control.
    pub fn description(&self) -> &'static str {
        match self {
            TraitName::Openness => "Openness to experience and new ideas",
            TraitName::Conscientiousness => "Organization, responsibility, and dependability",
            TraitName::Extraversion => "Sociability and assertiveness",
            TraitName::Agreeableness => "Cooperation and trustworthiness",
            TraitName::EmotionalRange => "Emotional stability and resilience",
            TraitName::Conversation => "Communication and social interaction skills",
            TraitName::OpennessToChange => "Adaptability and flexibility",
            TraitName::Hedonism => "Pursuit of pleasure and enjoyment",
            TraitName::SelfEnhancement => "Personal achievement and success",
            TraitName::SelfTranscendence => "Concern for others and universal values",
        }
    }
}

impl fmt::Display for TraitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TraitName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TraitName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_trait(s))
    }
}
