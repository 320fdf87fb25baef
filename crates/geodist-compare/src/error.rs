//! Comparison-harness error type.

use thiserror::Error;

use geodist_core::DistanceError;

/// Errors produced by `geodist-compare`.
#[derive(Debug, Error)]
pub enum CompareError {
    /// A calculator failed; the run stops at the first failure.
    #[error("{label}: {source}")]
    Case {
        label: String,
        #[source]
        source: DistanceError,
    },

    #[error("iteration count must be at least 1")]
    NoIterations,
}

pub type CompareResult<T> = Result<T, CompareError>;
