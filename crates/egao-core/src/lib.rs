//! egao-core
//!
//! Pure domain types for the EGAO care-plan service: client profiles, the
//! ADL catalogue, care-plan documents, and token accounting. No AWS
//! dependency — this is the shared vocabulary of the system.

pub mod error;
pub mod models;
