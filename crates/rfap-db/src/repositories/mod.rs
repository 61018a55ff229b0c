//! Repository implementations
//!
//! Implementations of the repository traits defined in rfap-core.

mod error;
mod memory;
mod user;

pub use memory::MemoryUserRepository;
pub use user::PgUserRepository;
