//! ProfileStore - single owner of the profile being edited.

use tracing::debug;

use super::{PersonalityProfile, TraitName};
use crate::domain::foundation::{TraitScore, ValidationError};

/// Owns the personality profile a user is editing.
///
/// Out-of-range input is clamped into `[0, 100]` rather than rejected, so
/// the held profile satisfies the range invariant after every mutation.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    profile: PersonalityProfile,
}

impl ProfileStore {
    /// Creates a store holding the all-50 profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the current profile.
    pub fn get(&self) -> PersonalityProfile {
        self.profile
    }

    /// Sets one trait, clamping the value into range.
    pub fn set_trait(&mut self, name: TraitName, value: i64) {
        let score = match TraitScore::try_new(value) {
            Ok(score) => score,
            Err(err) => {
                let clamped = TraitScore::clamped(value);
                debug!(error = %err, trait_name = %name, clamped = clamped.value(), "Clamped trait value");
                clamped
            }
        };
        self.profile.set(name, score);
    }

    /// Sets one trait by its wire key.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownTrait` if `name` is not one of the
    /// ten traits; the store is left untouched.
    pub fn set_trait_by_name(&mut self, name: &str, value: i64) -> Result<(), ValidationError> {
        let name: TraitName = name.parse()?;
        self.set_trait(name, value);
        Ok(())
    }

    /// Restores every trait to 50.
    pub fn reset(&mut self) {
        self.profile = PersonalityProfile::neutral();
    }
}
