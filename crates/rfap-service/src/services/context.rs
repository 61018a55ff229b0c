//! Service context - dependency container for services
//!
//! Holds the user directory, the credential hasher, and the token issuer.

use std::sync::Arc;

use rfap_common::auth::{PasswordService, TokenIssuer};
use rfap_core::traits::UserRepository;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Built once at startup and shared read-only across requests.
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    password_service: PasswordService,
    token_issuer: Arc<TokenIssuer>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_service: PasswordService,
        token_issuer: Arc<TokenIssuer>,
    ) -> Self {
        Self {
            user_repo,
            password_service,
            token_issuer,
        }
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the credential hasher
    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }

    /// Get the token issuer
    pub fn token_issuer(&self) -> &TokenIssuer {
        self.token_issuer.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("user_repo", &"dyn UserRepository")
            .field("password_service", &self.password_service)
            .field("token_issuer", &self.token_issuer)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    password_service: Option<PasswordService>,
    token_issuer: Option<Arc<TokenIssuer>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn password_service(mut self, service: PasswordService) -> Self {
        self.password_service = Some(service);
        self
    }

    pub fn token_issuer(mut self, issuer: Arc<TokenIssuer>) -> Self {
        self.token_issuer = Some(issuer);
        self
    }

    /// Build the ServiceContext
    ///
    /// The hasher falls back to argon2 defaults when not set.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the repository or issuer is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.password_service.unwrap_or_default(),
            self.token_issuer
                .ok_or_else(|| ServiceError::validation("token_issuer is required"))?,
        ))
    }
}
