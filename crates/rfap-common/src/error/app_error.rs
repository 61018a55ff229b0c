//! Application error types
//!
//! Errors raised by the shared infrastructure: hashing, signing, config and
//! database bootstrap.

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Token errors
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    // Credential errors
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Invalid password hash: {0}")]
    Verification(String),

    #[error("Token signing failed: {0}")]
    Signing(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}
