//! Trait score value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A personality trait score between 0 and 100 inclusive.
///
/// Serializes as a bare integer. Deserialization rejects values outside
/// the range, so a parsed score always satisfies the invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitScore(#[serde(deserialize_with = "deserialize_score")] u8);

impl TraitScore {
    /// Lowest allowed score.
    pub const MIN: Self = Self(0);

    /// Highest allowed score.
    pub const MAX: Self = Self(100);

    /// The score every trait starts from.
    pub const NEUTRAL: Self = Self(50);

    /// Creates a new TraitScore, clamping to valid range.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    /// Creates a TraitScore, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if !(0..=100).contains(&value) {
            return Err(ValidationError::out_of_range("trait_score", 0, 100, value));
        }
        Ok(Self(value as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for TraitScore {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for TraitScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn deserialize_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    TraitScore::try_new(raw)
        .map(|score| score.0)
        .map_err(serde::de::Error::custom)
}
