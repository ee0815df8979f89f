//! PredictionClient - drives the request lifecycle against the prediction service.
//!
//! Submitting a profile moves the client from `Idle` (or a previous outcome)
//! to `Pending`, issues one request, and settles in `Succeeded` or `Failed`.
//!
//! # Concurrency
//!
//! - At most one request is outstanding: a submit while `Pending` is rejected
//!   with [`SubmitError::AlreadyInProgress`] and changes nothing.
//! - Every accepted submit and every reset bumps a submission generation.
//!   A response is applied only if the generation it was issued under is
//!   still current; otherwise it is discarded. `reset()` therefore never
//!   needs to cancel the network call.
//! - State sits behind a mutex that is released before the network await, so
//!   `current_state()` and `reset()` stay usable while a submit is suspended.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::foundation::StateMachine;
use crate::domain::prediction::{PredictionResult, RequestPhase, RequestState};
use crate::domain::profile::PersonalityProfile;
use crate::ports::{PredictionError, PredictionService};

/// Reasons a submit call is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// A request is already outstanding.
    #[error("a prediction request is already in progress")]
    AlreadyInProgress,
}

/// Client-side owner of the prediction request state.
pub struct PredictionClient {
    service: Arc<dyn PredictionService>,
    inner: Mutex<ClientState>,
}

#[derive(Debug, Default)]
struct ClientState {
    state: RequestState,
    generation: u64,
    last_error: Option<PredictionError>,
}

impl PredictionClient {
    /// Creates an idle client backed by `service`.
    pub fn new(service: Arc<dyn PredictionService>) -> Self {
        Self {
            service,
            inner: Mutex::new(ClientState::default()),
        }
    }

    /// Submits a profile snapshot and waits for the outcome.
    ///
    /// Service failures never surface here; they land in
    /// `RequestState::Failed` with the cause kept in [`last_error`].
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::AlreadyInProgress` if a request is outstanding.
    ///
    /// [`last_error`]: PredictionClient::last_error
    pub async fn submit(&self, profile: PersonalityProfile) -> Result<(), SubmitError> {
        let generation = self.begin()?;
        let mut guard = InFlight {
            client: self,
            generation,
            settled: false,
        };

        info!(generation, "Submitting profile for prediction");
        let outcome = self.service.predict(&profile).await;

        guard.settled = true;
        self.complete(generation, outcome);
        Ok(())
    }

    /// Returns a copy of the current state.
    pub fn current_state(&self) -> RequestState {
        self.lock().state.clone()
    }

    /// Returns the current submission generation.
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Returns the full cause of the current `Failed` state, if any.
    pub fn last_error(&self) -> Option<PredictionError> {
        self.lock().last_error.clone()
    }

    /// Forces the state back to `Idle`.
    ///
    /// An outstanding request keeps running; its response will be discarded.
    pub fn reset(&self) {
        let mut inner = self.lock();
        let from = inner.state.phase();
        inner.generation += 1;
        inner.state = RequestState::Idle;
        inner.last_error = None;
        debug!(%from, generation = inner.generation, "Request state reset to Idle");
    }

    /// Moves to `Pending` and returns the generation of the new submission.
    fn begin(&self) -> Result<u64, SubmitError> {
        let mut inner = self.lock();
        let from = inner.state.phase();

        if !from.can_transition_to(&RequestPhase::Pending) {
            debug!(%from, "Rejected submit while a request is outstanding");
            return Err(SubmitError::AlreadyInProgress);
        }

        inner.generation += 1;
        inner.state = RequestState::Pending;
        inner.last_error = None;
        debug!(%from, generation = inner.generation, "Request state -> Pending");
        Ok(inner.generation)
    }

    /// Applies an outcome if its submission is still current.
    fn complete(&self, generation: u64, outcome: Result<PredictionResult, PredictionError>) {
        let mut inner = self.lock();

        if inner.generation != generation {
            warn!(
                generation,
                current = inner.generation,
                "Discarding stale prediction response"
            );
            return;
        }

        let target = match outcome {
            Ok(_) => RequestPhase::Succeeded,
            Err(_) => RequestPhase::Failed,
        };
        if let Err(err) = inner.state.phase().transition_to(target) {
            warn!(error = %err, "Discarding prediction response");
            return;
        }

        match outcome {
            Ok(result) => {
                info!(
                    generation,
                    role = %result.predicted_role.role,
                    alternatives = result.alternative_roles.len(),
                    "Prediction succeeded"
                );
                inner.state = RequestState::Succeeded(result);
            }
            Err(err) => {
                warn!(
                    generation,
                    error = %err,
                    retryable = err.is_retryable(),
                    "Prediction failed"
                );
                inner.state = RequestState::Failed(err.summary());
                inner.last_error = Some(err);
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, ClientState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Returns the client to `Idle` if a submit future is dropped mid-request.
struct InFlight<'a> {
    client: &'a PredictionClient,
    generation: u64,
    settled: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut inner = self.client.lock();
        if inner.generation == self.generation {
            inner.generation += 1;
            inner.state = RequestState::Idle;
            debug!(generation = self.generation, "Submit abandoned, request state -> Idle");
        }
    }
}
