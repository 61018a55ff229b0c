//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Signup response carrying the stored record's id
#[derive(Debug, Clone, Serialize)]
pub struct SignupResponse {
    #[serde(rename = "insertedId")]
    pub inserted_id: String,
}

/// Login response carrying a freshly signed token
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub health: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            health: "OK".to_string(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "unavailable" }.to_string(),
            database: database_healthy,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.database
    }
}
