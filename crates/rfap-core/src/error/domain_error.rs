//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Number already registered: {0}")]
    NumberAlreadyExists(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    /// The store could not be reached at all (I/O, TLS, pool exhausted or closed)
    #[error("Database unavailable: {0}")]
    DatabaseUnavailable(String),

    /// The store answered but the query failed
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::NumberAlreadyExists(_) => "NUMBER_ALREADY_EXISTS",
            Self::DatabaseUnavailable(_) => "DATABASE_UNAVAILABLE",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::NumberAlreadyExists(_))
    }

    /// Check if the store itself is unreachable
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::DatabaseUnavailable(_))
    }
}
