//! PersonalityProfile - the ten-trait vector sent to the prediction service.

use serde::{Deserialize, Serialize};

use super::TraitName;
use crate::domain::foundation::TraitScore;

/// A complete personality assessment: one score per trait.
///
/// Serializes to the request body of `POST /predict`: a flat JSON object
/// with exactly the ten trait keys and integer values. Every field is a
/// [`TraitScore`], so no instance can hold an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonalityProfile {
    openness: TraitScore,
    conscientiousness: TraitScore,
    extraversion: TraitScore,
    agreeableness: TraitScore,
    emotional_range: TraitScore,
    conversation: TraitScore,
    openness_to_change: TraitScore,
    hedonism: TraitScore,
    self_enhancement: TraitScore,
    self_transcendence: TraitScore,
}

impl PersonalityProfile {
    /// Creates a profile with every trait at the neutral score of 50.
    pub fn neutral() -> Self {
        Self::uniform(TraitScore::NEUTRAL)
    }

    /// Creates a profile with every trait at the same score.
    pub fn uniform(score: TraitScore) -> Self {
        Self {
            openness: score,
            conscientiousness: score,
            extraversion: score,
            agreeableness: score,
            emotional_range: score,
            conversation: score,
            openness_to_change: score,
            hedonism: score,
            self_enhancement: score,
            self_transcendence: score,
        }
    }

    /// Returns the score of one trait.
    pub fn get(&self, name: TraitName) -> TraitScore {
        match name {
            TraitName::Openness => self.openness,
            TraitName::Conscientiousness => self.conscientiousness,
            TraitName::Extraversion => self.extraversion,
            TraitName::Agreeableness => self.agreeableness,
            TraitName::EmotionalRange => self.emotional_range,
            TraitName::Conversation => self.conversation,
            TraitName::OpennessToChange => self.openness_to_change,
            TraitName::Hedonism => self.hedonism,
            TraitName::SelfEnhancement => self.self_enhancement,
            TraitName::SelfTranscendence => self.self_transcendence,
        }
    }

    /// Replaces the score of one trait.
    pub fn set(&mut self, name: TraitName, score: TraitScore) {
        let slot = match name {
            TraitName::Openness => &mut self.openness,
            TraitName::Conscientiousness => &mut self.conscientiousness,
            TraitName::Extraversion => &mut self.extraversion,
            TraitName::Agreeableness => &mut self.agreeableness,
            TraitName::EmotionalRange => &mut self.emotional_range,
            TraitName::Conversation => &mut self.conversation,
            TraitName::OpennessToChange => &mut self.openness_to_change,
            TraitName::Hedonism => &mut self.hedonism,
            TraitName::SelfEnhancement => &mut self.self_enhancement,
            TraitName::SelfTranscendence => &mut self.self_transcendence,
        };
        *slot = score;
    }

    /// Returns a copy with one trait replaced.
    pub fn with(mut self, name: TraitName, score: TraitScore) -> Self {
        self.set(name, score);
        self
    }

    /// Iterates `(trait, score)` pairs in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (TraitName, TraitScore)> + '_ {
        TraitName::ALL.into_iter().map(move |name| (name, self.get(name)))
    }
}

impl Default for PersonalityProfile {
    fn default() -> Self {
        Self::neutral()
    }
}
