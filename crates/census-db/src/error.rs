//! Database error types for census-db.

use thiserror::Error;

/// Errors from entity store operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The addressed row does not exist.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// A caller-supplied argument is out of range (e.g., negative pagination).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A constraint conflict the upsert path could not resolve, or a
    /// foreign-key violation that slipped past the existence check.
    #[error("Integrity conflict: {0}")]
    IntegrityConflict(String),

    /// A SQL query failed or returned an unparseable value.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
