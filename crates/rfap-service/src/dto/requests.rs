//! Request DTOs for API endpoints
//!
//! Request DTOs implement `Deserialize` and `Validate`; length caps are
//! checked when credentials are extracted.

use std::fmt;

use serde::Deserialize;
use validator::Validate;

use crate::services::ServiceError;

// ============================================================================
// Auth Requests
// ============================================================================

/// Signup and login request body
///
/// Both fields are optional at the wire level so that an absent field
/// surfaces as a `MissingField` error naming it, not as a JSON rejection.
#[derive(Clone, Default, Deserialize, Validate)]
pub struct AuthRequest {
    #[validate(length(max = 64, message = "Number must be at most 64 characters"))]
    pub number: Option<String>,

    #[validate(length(max = 1024, message = "Password must be at most 1024 characters"))]
    pub password: Option<String>,
}

impl AuthRequest {
    pub fn new(number: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            number: Some(number.into()),
            password: Some(password.into()),
        }
    }

    /// Extract the credential pair.
    ///
    /// Absent or empty fields are rejected first, `password` before `number`;
    /// length caps are checked only once both are present.
    pub fn credentials(&self) -> Result<Credentials, ServiceError> {
        let password = required(self.password.as_deref(), "password")?;
        let number = required(self.number.as_deref(), "number")?;

        self.validate()
            .map_err(|e| ServiceError::validation(format!("Validation error: {e}")))?;

        Ok(Credentials {
            number: number.to_string(),
            password: password.to_string(),
        })
    }
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, ServiceError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ServiceError::MissingField(field)),
    }
}

impl fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthRequest")
            .field("number", &self.number)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// A phone number and plaintext password, both present and non-empty
#[derive(Clone)]
pub struct Credentials {
    pub number: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("number", &self.number)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
