//! Mock Prediction Service for testing.
//!
//! Provides a configurable in-memory implementation of the
//! PredictionService port, so the client lifecycle can be exercised
//! without a running scoring service.
//!
//! # Features
//!
//! - Pre-configured results and errors, consumed in order
//! - Simulated latency
//! - A gate that holds every answer until released, for slow or silent services
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let gate = Arc::new(Notify::new());
//! let service = MockPredictionService::new()
//!     .with_result(result)
//!     .with_gate(gate.clone());
//!
//! // ... submit, observe Pending ...
//! gate.notify_one();
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::sleep;

use crate::domain::prediction::{PredictionResult, RolePrediction};
use crate::domain::profile::PersonalityProfile;
use crate::ports::{PredictionError, PredictionService};

/// Mock prediction service for testing.
#[derive(Debug, Clone)]
pub struct MockPredictionService {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Simulated latency per request.
    delay: Duration,
    /// When set, every answer waits for a notification.
    gate: Option<Arc<Notify>>,
    /// Profiles received, in call order.
    calls: Arc<Mutex<Vec<PersonalityProfile>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a prediction.
    Success(PredictionResult),
    /// Return an error.
    Error(PredictionError),
}

impl Default for MockPredictionService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPredictionService {
    /// Creates a new mock service with no queued responses.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            delay: Duration::ZERO,
            gate: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a successful prediction.
    pub fn with_result(self, result: PredictionResult) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Success(result));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: PredictionError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Holds every answer until `gate` is notified once per request.
    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Returns the number of predictions requested.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all profiles received.
    pub fn get_calls(&self) -> Vec<PersonalityProfile> {
        self.calls.lock().unwrap().clone()
    }

    /// Gets the next response or a default.
    fn next_response(&self) -> MockResponse {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                MockResponse::Success(PredictionResult::new(RolePrediction::new(
                    "Mock Role",
                    100.0,
                )))
            })
    }
}

#[async_trait]
impl PredictionService for MockPredictionService {
    async fn predict(
        &self,
        profile: &PersonalityProfile,
    ) -> Result<PredictionResult, PredictionError> {
        self.calls.lock().unwrap().push(*profile);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match self.next_response() {
            MockResponse::Success(result) => Ok(result),
            MockResponse::Error(err) => Err(err),
        }
    }

    async fn welcome(&self) -> Result<String, PredictionError> {
        Ok("Mock prediction service".to_string())
    }
}
