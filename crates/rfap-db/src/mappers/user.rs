//! User entity <-> model mapper

use rfap_core::entities::User;
use rfap_core::value_objects::UserId;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            number: model.number,
            password_hash: model.password_hash,
            created_at: model.created_at,
        }
    }
}
