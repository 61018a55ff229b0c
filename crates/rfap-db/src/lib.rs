//! # rfap-db
//!
//! Database layer implementing the user directory with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides the implementations of `UserRepository` defined in
//! `rfap-core`. It handles:
//!
//! - Connection pool management and schema bootstrap
//! - The `users` row model with a SQLx `FromRow` derive
//! - Entity ↔ Model mapping
//! - A Postgres repository and an in-memory repository with the same
//!   uniqueness guarantee
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rfap_db::{create_pool, ensure_schema, DatabaseConfig, PgUserRepository};
//! use rfap_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig {
//!         url: std::env::var("DATABASE_URL")?,
//!         ..Default::default()
//!     };
//!     let pool = create_pool(&config).await?;
//!     ensure_schema(&pool).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, ensure_schema, DatabaseConfig, PgPool};
pub use repositories::{MemoryUserRepository, PgUserRepository};
