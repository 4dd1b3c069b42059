//! Error types for solver operations.

use rh_core::RhError;
use thiserror::Error;

/// Errors that can occur while setting up or running a rod calculation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Problem setup error: {what}")]
    ProblemSetup { what: String },

    #[error("Output buffer too small: need {required} values, got {len}")]
    OutputBuffer { required: usize, len: usize },

    #[error("Numeric error: {what}")]
    Numeric { what: String },

    #[error("Core error: {0}")]
    Core(#[from] RhError),
}

pub type SolverResult<T> = Result<T, SolverError>;
