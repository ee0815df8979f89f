//! Prediction module - service results and the request lifecycle.

mod request_state;
mod result;

pub use request_state::{RequestPhase, RequestState};
pub use result::{PredictionResult, RolePrediction};
