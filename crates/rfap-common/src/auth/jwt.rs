//! Bearer token issuance
//!
//! Tokens are standard three-part JWTs signed with HS256 using the `jsonwebtoken` crate.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Value of the `iss` claim on every token this service signs
pub const TOKEN_ISSUER: &str = "rfap_back";

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Phone number of the authenticated user
    pub number: String,
    /// Issuer
    pub iss: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Signs bearer tokens for authenticated users
#[derive(Clone)]
pub struct TokenIssuer {
    secret: Vec<u8>,
    token_expiry: i64,
}

impl TokenIssuer {
    /// Create a new issuer with the given key and validity window (seconds)
    ///
    /// An empty key is accepted here; `issue` rejects it.
    #[must_use]
    pub fn new(secret: &str, token_expiry: i64) -> Self {
        Self {
            secret: secret.as_bytes().to_vec(),
            token_expiry,
        }
    }

    /// Validity window in seconds
    #[must_use]
    pub fn token_expiry(&self) -> i64 {
        self.token_expiry
    }

    /// Issue a signed token for a user
    ///
    /// # Errors
    /// Returns `AppError::Signing` if the key is empty, the expiry is out of
    /// range, or encoding fails
    pub fn issue(&self, number: &str) -> Result<String, AppError> {
        if self.secret.is_empty() {
            return Err(AppError::Signing("signing key is empty".to_string()));
        }

        let now = Utc::now();
        let expires_at = Duration::try_seconds(self.token_expiry)
            .and_then(|validity| now.checked_add_signed(validity))
            .ok_or_else(|| {
                AppError::Signing(format!("token expiry out of range: {}s", self.token_expiry))
            })?;

        let claims = Claims {
            number: number.to_string(),
            iss: TOKEN_ISSUER.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&self.secret),
        )
        .map_err(|e| AppError::Signing(e.to_string()))
    }

    /// Decode and validate a token issued by this service
    ///
    /// # Errors
    /// Returns an error if the token is invalid, expired, or from another issuer
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[TOKEN_ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss"]);

        let token_data = decode::<Claims>(token, &DecodingKey::from_secret(&self.secret), &validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("token_expiry", &self.token_expiry)
            .finish_non_exhaustive()
    }
}
