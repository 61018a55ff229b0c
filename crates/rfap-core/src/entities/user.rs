//! User entity - an account identified by a phone number

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// User entity
///
/// `number` is unique across the directory and `password_hash` is the PHC
/// string produced at signup. Records are never updated after creation.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub number: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with a freshly generated ID
    pub fn new(number: String, password_hash: String) -> Self {
        Self {
            id: UserId::generate(),
            number,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

// Keep the hash out of logs and panic messages
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("number", &self.number)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}
