//! Error types for geodist-sql.

use geodist_core::DistanceError;
use thiserror::Error;

/// Errors raised while talking to the database.  None are retried.
#[derive(Debug, Error)]
pub enum SqlError {
    /// Opening the database or registering the SQL functions failed.
    #[error("connection error: {0}")]
    Connection(#[source] rusqlite::Error),

    /// Preparing, executing, or reading back the distance query failed.
    #[error("query error: {0}")]
    Query(#[source] rusqlite::Error),

    /// The engine answered with NULL instead of a distance.
    #[error("distance query returned NULL")]
    NullDistance,
}

/// Alias for `Result<T, SqlError>`.
pub type SqlResult<T> = Result<T, SqlError>;

impl From<SqlError> for DistanceError {
    fn from(err: SqlError) -> Self {
        DistanceError::Backend { backend: "sql", source: Box::new(err) }
    }
}
