//! Test fixtures and data generators
//!
//! Provides reusable request and response shapes for integration tests.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generate a phone number no other test has used
pub fn unique_number() -> String {
    let suffix = Uuid::new_v4().as_u128() % 10_000_000_000;
    format!("+1{suffix:010}")
}

/// Signup and login request body
#[derive(Debug, Clone, Serialize)]
pub struct AuthBody {
    pub number: String,
    pub password: String,
}

impl AuthBody {
    pub fn new(number: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            password: password.into(),
        }
    }

    pub fn unique() -> Self {
        Self::new(unique_number(), "correct horse battery staple")
    }

    /// Same number, different password
    pub fn with_password(&self, password: &str) -> Self {
        Self::new(self.number.clone(), password)
    }
}

/// Signup response
#[derive(Debug, Deserialize)]
pub struct SignupResponse {
    #[serde(rename = "insertedId")]
    pub inserted_id: String,
}

/// Login response
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(rename = "errMsg")]
    pub err_msg: Option<String>,
}
