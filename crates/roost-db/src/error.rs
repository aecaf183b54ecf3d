//! Database errors

use thiserror::Error;

/// Database errors
///
/// Absence of a row is not an error here; lookups return `Option` and leave
/// the not-found decision to the caller.
#[derive(Error, Debug)]
pub enum DbError {
    /// SQLx error
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Result alias for repository operations
pub type DbResult<T> = Result<T, DbError>;
