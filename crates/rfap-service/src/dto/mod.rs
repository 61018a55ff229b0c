//! Data transfer objects for API requests and responses

pub mod requests;
pub mod responses;

pub use requests::{AuthRequest, Credentials};
pub use responses::{HealthResponse, LoginResponse, ReadinessResponse, SignupResponse};
