//! Service layer error types
//!
//! One variant per way a signup or login can fail. The `Display` text is the
//! message returned to clients; `detail` carries the underlying cause for
//! server-side failures.

use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// A required request field was absent or empty
    MissingField(&'static str),

    /// Signup for a number that already has an account
    DuplicateIdentifier(String),

    /// Unknown number or wrong password; the two are indistinguishable
    InvalidCredentials,

    /// The user directory could not be queried
    Directory { message: &'static str, detail: String },

    /// Password hashing failed
    Hashing(String),

    /// Token signing failed
    Signing(String),

    /// The directory rejected the new record for a reason other than a duplicate
    InsertFailed(String),

    /// Invalid input or misconfigured service
    Validation(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Missing required field '{field}'."),
            Self::DuplicateIdentifier(number) => {
                write!(f, "Number '{number}' already registered in the database")
            }
            Self::InvalidCredentials => write!(f, "Invalid Number or Password"),
            Self::Directory { message, .. } => write!(f, "{message}"),
            Self::Hashing(_) => write!(f, "Failed to hash password."),
            Self::Signing(_) => write!(f, "Failed to sign token"),
            Self::InsertFailed(_) => write!(f, "Failed to insert user data."),
            Self::Validation(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl ServiceError {
    /// Directory failure while checking for an existing number during signup
    pub fn duplicate_check_failed(detail: impl fmt::Display) -> Self {
        Self::Directory {
            message: "Failed to query database for duplicated number",
            detail: detail.to_string(),
        }
    }

    /// Directory failure while looking up a user during login
    pub fn lookup_failed(detail: impl fmt::Display) -> Self {
        Self::Directory {
            message: "Failed to read from DB.",
            detail: detail.to_string(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingField(_)
            | Self::InvalidCredentials
            | Self::InsertFailed(_)
            | Self::Validation(_) => 400,
            Self::DuplicateIdentifier(_) => 409,
            Self::Directory { .. } | Self::Hashing(_) | Self::Signing(_) => 500,
        }
    }

    /// Get the error code used in logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "MISSING_FIELD",
            Self::DuplicateIdentifier(_) => "DUPLICATE_IDENTIFIER",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Directory { .. } => "DIRECTORY_ERROR",
            Self::Hashing(_) => "HASHING_ERROR",
            Self::Signing(_) => "SIGNING_ERROR",
            Self::InsertFailed(_) => "INSERT_FAILED",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// Underlying cause, exposed to clients as `errMsg`
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Directory { detail, .. } => Some(detail),
            Self::Hashing(d) | Self::Signing(d) | Self::InsertFailed(d) => Some(d),
            _ => None,
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
