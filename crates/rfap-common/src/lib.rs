//! # rfap-common
//!
//! Shared utilities including configuration, error handling, credential hashing,
//! token issuance, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{Claims, PasswordService, TokenIssuer, TOKEN_ISSUER};
pub use config::{
    AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment, HashingConfig, JwtConfig,
    ServerConfig,
};
pub use error::AppError;
pub use telemetry::{
    try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError,
};
