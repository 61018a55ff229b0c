//! # rfap-service
//!
//! Application layer containing the signup/login workflow, its dependency
//! context, and request/response DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AuthRequest, Credentials, HealthResponse, LoginResponse, ReadinessResponse, SignupResponse,
};
pub use services::{AuthService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult};
