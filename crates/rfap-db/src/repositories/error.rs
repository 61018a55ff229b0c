//! Error handling utilities for repositories

use rfap_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
///
/// Errors that mean the server could not be reached at all become
/// `DatabaseUnavailable`; everything else is a `DatabaseError`.
pub fn map_db_error(e: SqlxError) -> DomainError {
    if is_connectivity_error(&e) {
        DomainError::DatabaseUnavailable(e.to_string())
    } else {
        DomainError::DatabaseError(e.to_string())
    }
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

fn is_connectivity_error(e: &SqlxError) -> bool {
    matches!(
        e,
        SqlxError::Io(_)
            | SqlxError::Tls(_)
            | SqlxError::PoolTimedOut
            | SqlxError::PoolClosed
            | SqlxError::WorkerCrashed
    )
}
