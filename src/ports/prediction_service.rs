//! Prediction Service Port - Interface to the remote role scoring service.
//!
//! The service is an opaque HTTP endpoint: it receives a personality
//! profile and answers with a predicted role plus ranked alternatives.
//! This port lets the prediction client drive that exchange without
//! coupling to a particular transport.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct FixedService;
//!
//! #[async_trait]
//! impl PredictionService for FixedService {
//!     async fn predict(
//!         &self,
//!         _profile: &PersonalityProfile,
//!     ) -> Result<PredictionResult, PredictionError> {
//!         Ok(PredictionResult::new(RolePrediction::new("Engineer", 73.5)))
//!     }
//!     // ... welcome()
//! }
//! ```

use async_trait::async_trait;

use crate::domain::prediction::PredictionResult;
use crate::domain::profile::PersonalityProfile;

/// Port for the role prediction service.
#[async_trait]
pub trait PredictionService: Send + Sync {
    /// Scores a profile (`POST /predict`).
    async fn predict(&self, profile: &PersonalityProfile)
        -> Result<PredictionResult, PredictionError>;

    /// Fetches the service greeting (`GET /`), usable as a liveness probe.
    async fn welcome(&self) -> Result<String, PredictionError>;
}

/// Prediction service errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictionError {
    /// The request could not be built (bad URL, unserializable body).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The service could not be reached or the connection failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// The service did not answer in time.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// The service answered with a non-2xx status.
    #[error("service returned HTTP {status}: {body}")]
    Service {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The service answered 2xx but the body did not have the expected shape.
    #[error("malformed response: {0}")]
    ResponseFormat(String),
}

impl PredictionError {
    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a service error.
    pub fn service(status: u16, body: impl Into<String>) -> Self {
        Self::Service {
            status,
            body: body.into(),
        }
    }

    /// Creates a response format error.
    pub fn response_format(message: impl Into<String>) -> Self {
        Self::ResponseFormat(message.into())
    }

    /// Short message suitable for showing to the user.
    ///
    /// Drops transport details and response bodies; those stay available
    /// through `Display` for logs.
    pub fn summary(&self) -> String {
        match self {
            PredictionError::InvalidRequest(_) => {
                "Could not build the prediction request".to_string()
            }
            PredictionError::Transport(_) => {
                "Could not reach the prediction service".to_string()
            }
            PredictionError::Timeout { timeout_secs } => {
                format!("The prediction service did not respond within {}s", timeout_secs)
            }
            PredictionError::Service { status, .. } => {
                format!("The prediction service returned an error (HTTP {})", status)
            }
            PredictionError::ResponseFormat(_) => {
                "The prediction service returned an unexpected response".to_string()
            }
        }
    }

    /// Returns true if resubmitting the same profile may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            PredictionError::Transport(_) | PredictionError::Timeout { .. } => true,
            PredictionError::Service { status, .. } => *status == 429 || *status >= 500,
            PredictionError::InvalidRequest(_) | PredictionError::ResponseFormat(_) => false,
        }
    }
}
