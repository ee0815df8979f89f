//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, the state machine trait, and error types
//! that form the vocabulary of the personality predictor domain.

mod errors;
mod state_machine;
mod trait_score;

pub use errors::ValidationError;
pub use state_machine::StateMachine;
pub use trait_score::TraitScore;
