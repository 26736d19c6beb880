//! Core data models for the state registry.

pub mod state;

pub use state::StateRecord;
