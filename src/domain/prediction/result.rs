//! Prediction results returned by the scoring service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A role together with the service's confidence in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolePrediction {
    /// Role name, e.g. "Software Engineer".
    pub role: String,
    /// Confidence on a 0-100 scale (not validated client-side).
    pub percentage: f64,
}

impl RolePrediction {
    /// Creates a new role prediction.
    pub fn new(role: impl Into<String>, percentage: f64) -> Self {
        Self {
            role: role.into(),
            percentage,
        }
    }
}

impl fmt::Display for RolePrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}%)", self.role, self.percentage)
    }
}

/// Response body of a successful `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// The most likely role.
    pub predicted_role: RolePrediction,
    /// Runner-up roles, ranked by the service. Order is preserved as received.
    pub alternative_roles: Vec<RolePrediction>,
}

impl PredictionResult {
    /// Creates a result with no alternatives.
    pub fn new(predicted_role: RolePrediction) -> Self {
        Self {
            predicted_role,
            alternative_roles: Vec::new(),
        }
    }

    /// Appends an alternative role.
    pub fn with_alternative(mut self, alternative: RolePrediction) -> Self {
        self.alternative_roles.push(alternative);
        self
    }

    /// Iterates the predicted role followed by the alternatives.
    pub fn ranked(&self) -> impl Iterator<Item = &RolePrediction> {
        std::iter::once(&self.predicted_role).chain(self.alternative_roles.iter())
    }
}
