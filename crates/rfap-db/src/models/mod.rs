//! Database models
//!
//! Row structs that map directly onto table columns.

mod user;

pub use user::UserModel;
