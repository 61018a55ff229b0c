//! Authentication service
//!
//! Handles signup and login by phone number and password.

use rfap_core::entities::User;
use rfap_core::error::DomainError;
use tracing::{error, field, info, instrument, warn, Span};

use crate::dto::{AuthRequest, Credentials, LoginResponse, SignupResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(number = field::Empty))]
    pub async fn signup(&self, request: AuthRequest) -> ServiceResult<SignupResponse> {
        let Credentials { number, password } = request.credentials()?;
        Span::current().record("number", number.as_str());

        let exists = self.ctx.user_repo().number_exists(&number).await.map_err(|e| {
            error!(error = %e, "Signup failed: duplicate check");
            ServiceError::duplicate_check_failed(e)
        })?;
        if exists {
            warn!("Signup rejected: number already registered");
            return Err(ServiceError::DuplicateIdentifier(number));
        }

        // Argon2 is CPU-bound; keep it off the async workers
        let hasher = self.ctx.password_service().clone();
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| ServiceError::Hashing(e.to_string()))?
            .map_err(|e| ServiceError::Hashing(e.to_string()))?;

        let user = User::new(number, password_hash);

        // The unique index is authoritative when two signups race past the check above
        let user_id = self.ctx.user_repo().insert(&user).await.map_err(|e| match e {
            DomainError::NumberAlreadyExists(number) => {
                warn!("Signup rejected: lost race for number");
                ServiceError::DuplicateIdentifier(number)
            }
            other => {
                error!(error = %other, "Signup failed: insert");
                ServiceError::InsertFailed(other.to_string())
            }
        })?;

        info!(user_id = %user_id, "User registered successfully");

        Ok(SignupResponse {
            inserted_id: user_id.to_string(),
        })
    }

    /// Login with phone number and password
    #[instrument(skip(self, request), fields(number = field::Empty))]
    pub async fn login(&self, request: AuthRequest) -> ServiceResult<LoginResponse> {
        let Credentials { number, password } = request.credentials()?;
        Span::current().record("number", number.as_str());

        let user = match self.ctx.user_repo().find_by_number(&number).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                warn!("Login failed: user not found");
                return Err(ServiceError::InvalidCredentials);
            }
            Err(e) if e.is_unavailable() => {
                error!(error = %e, "Login failed: directory unavailable");
                return Err(ServiceError::lookup_failed(e));
            }
            Err(e) => {
                warn!(error = %e, "Login failed: lookup error");
                return Err(ServiceError::InvalidCredentials);
            }
        };

        let hasher = self.ctx.password_service().clone();
        let stored_hash = user.password_hash.clone();
        let verified =
            tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash)).await;

        match verified {
            Ok(Ok(true)) => {}
            Ok(Ok(false)) => {
                warn!(user_id = %user.id, "Login failed: invalid password");
                return Err(ServiceError::InvalidCredentials);
            }
            Ok(Err(e)) => {
                warn!(user_id = %user.id, error = %e, "Login failed: unreadable stored hash");
                return Err(ServiceError::InvalidCredentials);
            }
            Err(e) => {
                error!(user_id = %user.id, error = %e, "Login failed: verification task");
                return Err(ServiceError::InvalidCredentials);
            }
        }

        let token = self.ctx.token_issuer().issue(&user.number).map_err(|e| {
            error!(error = %e, "Login failed: token signing");
            ServiceError::Signing(e.to_string())
        })?;

        info!(user_id = %user.id, "User logged in successfully");

        Ok(LoginResponse { token })
    }

    /// Whether the user directory is reachable
    pub async fn directory_ready(&self) -> bool {
        match self.ctx.user_repo().ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Directory ping failed");
                false
            }
        }
    }
}
