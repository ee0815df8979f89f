//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `prediction` - Prediction service clients (HTTP, mock)

pub mod prediction;

pub use prediction::{HttpPredictionService, HttpServiceConfig, MockPredictionService};
