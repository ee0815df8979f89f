//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (trait score, state machine, errors)
//! - `profile` - The ten-trait personality profile and its store
//! - `prediction` - Prediction results and the request state machine

pub mod foundation;
pub mod prediction;
pub mod profile;
