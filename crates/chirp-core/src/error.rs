//! Repository-level error types.

use thiserror::Error;

/// Failures surfaced by the persistence layer.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    /// A singular lookup matched more than one row. Callers must never rely
    /// on arbitrary "first match" semantics.
    #[error("Filter matched more than one row")]
    Ambiguous,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
