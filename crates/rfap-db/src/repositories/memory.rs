//! In-memory implementation of UserRepository
//!
//! Used by tests and local runs without PostgreSQL. Holds the same
//! one-record-per-number guarantee the unique index gives the Postgres table.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::instrument;

use rfap_core::entities::User;
use rfap_core::error::DomainError;
use rfap_core::traits::{RepoResult, UserRepository};
use rfap_core::value_objects::UserId;

/// In-memory user directory keyed by phone number
#[derive(Default)]
pub struct MemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
    offline: AtomicBool,
}

impl MemoryUserRepository {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate losing (or regaining) the connection to the store
    ///
    /// While offline every operation fails with `DatabaseUnavailable`.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    /// Whether the directory holds no users
    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }

    fn check_online(&self) -> RepoResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseUnavailable(
                "in-memory directory is offline".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    #[instrument(skip(self))]
    async fn find_by_number(&self, number: &str) -> RepoResult<Option<User>> {
        self.check_online()?;
        Ok(self.users.read().get(number).cloned())
    }

    #[instrument(skip(self, user), fields(user_id = %user.id, number = %user.number))]
    async fn insert(&self, user: &User) -> RepoResult<UserId> {
        self.check_online()?;

        let mut users = self.users.write();
        if users.contains_key(&user.number) {
            return Err(DomainError::NumberAlreadyExists(user.number.clone()));
        }
        users.insert(user.number.clone(), user.clone());

        Ok(user.id)
    }

    async fn ping(&self) -> RepoResult<()> {
        self.check_online()
    }
}

impl std::fmt::Debug for MemoryUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryUserRepository")
            .field("users", &self.len())
            .field("offline", &self.offline.load(Ordering::SeqCst))
            .finish()
    }
}
