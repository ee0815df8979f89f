//! Profile module - the personality profile a user edits and submits.
//!
//! # Domain Invariants
//!
//! 1. A profile always holds exactly ten traits
//! 2. Every trait score lies in `[0, 100]`, including between edits
//! 3. A fresh or reset profile scores every trait at 50

mod personality;
mod store;
mod trait_name;

pub use personality::PersonalityProfile;
pub use store::ProfileStore;
pub use trait_name::TraitName;
