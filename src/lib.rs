//! Personality Predictor - client for a career role prediction service.
//!
//! A user scores ten personality traits; the profile is submitted to a
//! remote scoring service, which answers with a predicted role and ranked
//! alternatives.
//!
//! - [`domain::profile::ProfileStore`] owns the profile being edited
//! - [`application::PredictionClient`] drives the request lifecycle
//! - [`adapters::prediction::HttpPredictionService`] talks to the service

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
