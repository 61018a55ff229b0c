//! Authentication handlers
//!
//! Endpoints for user signup and login.

use axum::{extract::State, Json};
use rfap_service::{AuthRequest, AuthService, LoginResponse, SignupResponse};

use crate::extractors::JsonBody;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AuthRequest>,
) -> ApiResult<Created<Json<SignupResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.signup(request).await?;
    Ok(Created(Json(response)))
}

/// Login with phone number and password
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AuthRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}
