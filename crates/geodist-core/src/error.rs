//! Distance error type.
//!
//! Calculators that live outside this crate (e.g. the SQL-backed one in
//! `geodist-sql`) keep their own error enums and convert them into
//! `DistanceError::Backend` via `From` impls, so every implementer of
//! [`DistanceCalculator`](crate::DistanceCalculator) shares one result type.

use thiserror::Error;

/// The top-level error type for `geodist-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum DistanceError {
    /// A non-positive iteration limit was passed to the Vincenty solver.
    #[error("iteration limit must be greater than 0 (got {0})")]
    InvalidIterationLimit(i32),

    /// The Vincenty λ iteration used up its budget without meeting tolerance.
    #[error("Vincenty formula failed to converge within {iteration_limit} iterations")]
    ConvergenceFailure { iteration_limit: i32 },

    /// Failure reported by an out-of-process calculator backend.
    #[error("{backend} backend error: {source}")]
    Backend {
        backend: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("unknown Earth radius model: {0:?}")]
    ParseRadius(String),

    #[error("unknown distance formula: {0:?}")]
    ParseFormula(String),

    #[error("invalid point {0:?}, expected \"latitude,longitude\"")]
    ParsePoint(String),
}

/// Shorthand result type for all `geodist-*` crates.
pub type DistanceResult<T> = Result<T, DistanceError>;
