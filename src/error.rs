//! Error types for registry construction and lookups.

use thiserror::Error;

/// Failure to answer a state lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The query was empty once surrounding whitespace was trimmed.
    #[error("Invalid Nigeria State")]
    InvalidInput,

    /// No state matched. Carries the query exactly as the caller supplied it.
    #[error("State \"{0}\" not found")]
    StateNotFound(String),
}

/// Failure to build a registry from a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset is not a JSON array of state records.
    #[error("Failed to parse state dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// A state name is blank once trimmed.
    #[error("State at position {0} has an empty name")]
    EmptyName(usize),

    /// Two names are equal after normalization.
    #[error("State \"{0}\" appears more than once")]
    DuplicateState(String),

    /// A state lists no senatorial districts.
    #[error("State \"{0}\" has no senatorial districts")]
    NoSenatorialDistricts(String),

    /// A state lists no LGAs.
    #[error("State \"{0}\" has no local government areas")]
    NoLgas(String),

    /// A district or LGA is listed twice within one state.
    #[error("State \"{state}\" lists \"{entry}\" more than once")]
    DuplicateEntry { state: String, entry: String },
}
