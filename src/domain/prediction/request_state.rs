//! Request lifecycle of a prediction submission.

use std::fmt;

use super::PredictionResult;
use crate::domain::foundation::StateMachine;

/// Where a prediction request stands, with its outcome payload.
///
/// Exactly one variant holds at a time. `Succeeded` and `Failed` are both
/// cleared when a new submission moves the state back to `Pending`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    /// Nothing submitted, or the last outcome was discarded.
    #[default]
    Idle,
    /// A request is outstanding.
    Pending,
    /// The service returned a well-formed prediction.
    Succeeded(PredictionResult),
    /// The request failed; holds a human-readable summary.
    Failed(String),
}

impl RequestState {
    /// Returns the payload-free phase of this state.
    pub fn phase(&self) -> RequestPhase {
        match self {
            RequestState::Idle => RequestPhase::Idle,
            RequestState::Pending => RequestPhase::Pending,
            RequestState::Succeeded(_) => RequestPhase::Succeeded,
            RequestState::Failed(_) => RequestPhase::Failed,
        }
    }

    /// Returns true while a request is outstanding.
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    /// Returns the prediction if the last request succeeded.
    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            RequestState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    /// Returns the failure summary if the last request failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Discriminant of [`RequestState`], used to check transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestPhase {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl StateMachine for RequestPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use RequestPhase::*;
        matches!(
            (self, target),
            (_, Idle)
                | (Idle, Pending)
                | (Succeeded, Pending)
                | (Failed, Pending)
                | (Pending, Succeeded)
                | (Pending, Failed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use RequestPhase::*;
        match self {
            Idle => vec![Idle, Pending],
            Pending => vec![Idle, Succeeded, Failed],
            Succeeded => vec![Idle, Pending],
            Failed => vec![Idle, Pending],
        }
    }
}

impl fmt::Display for RequestPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RequestPhase::Idle => "Idle",
            RequestPhase::Pending => "Pending",
            RequestPhase::Succeeded => "Succeeded",
            RequestPhase::Failed => "Failed",
        };
        write!(f, "{}", s)
    }
}
