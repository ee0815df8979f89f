//! Application layer - orchestrates domain types and ports.
//!
//! - `PredictionClient` - submission lifecycle against the prediction service

mod prediction_client;

pub use prediction_client::{PredictionClient, SubmitError};
