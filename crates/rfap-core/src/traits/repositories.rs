//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::User;
use crate::error::DomainError;
use crate::value_objects::UserId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by exact phone number. `Ok(None)` means no such user.
    async fn find_by_number(&self, number: &str) -> RepoResult<Option<User>>;

    /// Check if a number is already registered
    async fn number_exists(&self, number: &str) -> RepoResult<bool> {
        Ok(self.find_by_number(number).await?.is_some())
    }

    /// Persist a new user.
    ///
    /// Implementations must reject a second record for the same number with
    /// `DomainError::NumberAlreadyExists`, regardless of any earlier
    /// `number_exists` check by the caller.
    async fn insert(&self, user: &User) -> RepoResult<UserId>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> RepoResult<()>;
}
