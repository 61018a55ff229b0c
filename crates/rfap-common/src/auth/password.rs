//! Password hashing and verification utilities
//!
//! Uses Argon2id for secure password hashing (OWASP recommended). The stored
//! string is in PHC format, so the salt and cost parameters travel with it.

use argon2::{
    password_hash::{
        rand_core::OsRng, Error as PasswordHashError, PasswordHash, PasswordHasher,
        PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

use crate::config::HashingConfig;
use crate::error::AppError;

/// Password service for dependency injection
#[derive(Debug, Clone, Default)]
pub struct PasswordService {
    params: Option<Params>,
}

impl PasswordService {
    /// Create a new password service with the argon2 default cost
    #[must_use]
    pub fn new() -> Self {
        Self { params: None }
    }

    /// Create a password service with explicit cost parameters
    ///
    /// # Errors
    /// Returns `AppError::Config` if the parameters are out of range
    pub fn with_config(config: &HashingConfig) -> Result<Self, AppError> {
        let params = Params::new(config.memory_kib, config.iterations, config.parallelism, None)
            .map_err(|e| AppError::Config(format!("Invalid argon2 parameters: {e}")))?;

        Ok(Self {
            params: Some(params),
        })
    }

    fn argon2(&self) -> Argon2<'static> {
        match &self.params {
            Some(params) => Argon2::new(Algorithm::Argon2id, Version::V0x13, params.clone()),
            None => Argon2::default(),
        }
    }

    /// Hash a password with a fresh random salt
    ///
    /// # Errors
    /// Returns an error if hashing fails
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Hashing(e.to_string()))
    }

    /// Verify a password against a hash
    ///
    /// Parameters embedded in the hash are used, not this service's own cost.
    ///
    /// # Errors
    /// Returns `AppError::Verification` if the hash is structurally invalid
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| AppError::Verification(e.to_string()))?;

        match self.argon2().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => Err(AppError::Verification(e.to_string())),
        }
    }
}
