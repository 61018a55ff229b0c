//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use rfap_common::{AppConfig, AppError, PasswordService, TokenIssuer};
use rfap_core::traits::UserRepository;
use rfap_db::{create_pool, ensure_schema, PgUserRepository};
use rfap_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Connect to PostgreSQL, bootstrap the schema, and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = rfap_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    ensure_schema(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let user_repo = Arc::new(PgUserRepository::new(pool));

    create_app_state_with_repo(user_repo, config)
}

/// Create AppState around an already constructed user directory
pub fn create_app_state_with_repo(
    user_repo: Arc<dyn UserRepository>,
    config: AppConfig,
) -> Result<AppState, AppError> {
    let password_service = PasswordService::with_config(&config.hashing)?;

    if config.jwt.secret.is_empty() {
        warn!("JWT_KEY is not set; every login will fail to sign a token");
    }
    let token_issuer = Arc::new(TokenIssuer::new(
        &config.jwt.secret,
        config.jwt.token_expiry,
    ));

    let service_context = ServiceContextBuilder::new()
        .user_repo(user_repo)
        .password_service(password_service)
        .token_issuer(token_issuer)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let state = create_app_state(config).await?;
    let addr = state.config().server.address();
    let app = create_app(state);

    run_server(app, &addr).await
}
