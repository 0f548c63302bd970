use thiserror::Error;

/// Error types for the physlab-rs library.
#[derive(Error, Debug)]
pub enum LabError {
    /// Catalog lookup of an unknown experiment name.
    ///
    /// The presentation surface only offers catalog keys, so seeing this at
    /// runtime indicates a programming-contract violation, not a user error.
    #[error("Experiment not found: {0}")]
    ExperimentNotFound(String),

    /// Failure raised inside an experiment's computation during a run.
    ///
    /// Covers numeric domain errors (division by a zero denominator, square
    /// root of a negative value, argument outside a function's valid domain),
    /// arity mismatches, and malformed result shapes. Caught at the engine
    /// boundary and surfaced as display text; never retried.
    #[error("Computation error: {0}")]
    Computation(String),

    /// Construction-time parameter data defect.
    #[error("Parameter error: {0}")]
    Parameter(#[from] crate::parameters::ParameterError),

    /// Construction-time catalog defect (e.g. a duplicate experiment name).
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for physlab-rs operations.
pub type Result<T> = std::result::Result<T, LabError>;
