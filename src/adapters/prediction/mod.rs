//! Prediction Service Adapters.
//!
//! Implementations of the PredictionService port.
//!
//! ## Available Adapters
//!
//! - `HttpPredictionService` - The real scoring service over HTTP (reqwest)
//! - `MockPredictionService` - Configurable in-memory double for testing

mod http_service;
mod mock_service;

pub use http_service::{HttpPredictionService, HttpServiceConfig};
pub use mock_service::{MockPredictionService, MockResponse};
