//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PredictionService` - The remote role scoring service

mod prediction_service;

pub use prediction_service::{PredictionError, PredictionService};
