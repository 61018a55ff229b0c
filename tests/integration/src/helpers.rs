//! Test helpers for integration tests
//!
//! Provides an in-process app driven with `tower::ServiceExt::oneshot`, a
//! spawned HTTP server for PostgreSQL-backed tests, and response assertions.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
    Router,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use reqwest::{Client, Response, StatusCode};
use rfap_api::{create_app, create_app_state, create_app_state_with_repo};
use rfap_common::AppConfig;
use rfap_db::MemoryUserRepository;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower::ServiceExt;

/// Signing key used by every test configuration
pub const TEST_JWT_KEY: &str = "integration-test-signing-key";

/// Build a test configuration with cheap hashing and a known signing key
///
/// `overrides` replace or add environment-style keys; an override with an
/// empty value unsets the key.
pub fn test_config_with(overrides: &[(&str, &str)]) -> Result<AppConfig> {
    let mut vars: HashMap<String, String> = [
        ("PORT", "0"),
        ("HOST", "127.0.0.1"),
        ("DATABASE_URL", "postgres://unused"),
        ("JWT_KEY", TEST_JWT_KEY),
        ("ARGON2_MEMORY_KIB", "1024"),
        ("ARGON2_ITERATIONS", "1"),
        ("ARGON2_PARALLELISM", "1"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    if let Ok(url) = std::env::var("DATABASE_URL") {
        vars.insert("DATABASE_URL".to_string(), url);
    }

    for (key, value) in overrides {
        if value.is_empty() {
            vars.remove(*key);
        } else {
            vars.insert((*key).to_string(), (*value).to_string());
        }
    }

    AppConfig::from_lookup(|key| vars.get(key).cloned())
        .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Create a test configuration
pub fn test_config() -> Result<AppConfig> {
    test_config_with(&[])
}

/// The full router wired to an in-memory directory
#[derive(Clone)]
pub struct TestApp {
    pub router: Router,
    pub repo: Arc<MemoryUserRepository>,
}

impl TestApp {
    /// Build the app with the default test configuration
    pub fn new() -> Result<Self> {
        Self::with_config(test_config()?)
    }

    /// Build the app with a custom configuration
    pub fn with_config(config: AppConfig) -> Result<Self> {
        let repo = Arc::new(MemoryUserRepository::new());
        let state = create_app_state_with_repo(repo.clone(), config)?;

        Ok(Self {
            router: create_app(state),
            repo,
        })
    }

    /// Send a request with an optional raw body and return status and JSON body
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&str>,
    ) -> Result<(StatusCode, Value)> {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(raw) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(raw.to_string()))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = StatusCode::from_u16(response.status().as_u16())?;
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        Ok((status, value))
    }

    /// GET a path
    pub async fn get(&self, path: &str) -> Result<(StatusCode, Value)> {
        self.request(Method::GET, path, None).await
    }

    /// POST a serializable JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<(StatusCode, Value)> {
        let raw = serde_json::to_string(body)?;
        self.request(Method::POST, path, Some(&raw)).await
    }

    /// POST a raw body as `application/json`
    pub async fn post_raw(&self, path: &str, raw: &str) -> Result<(StatusCode, Value)> {
        self.request(Method::POST, path, Some(raw)).await
    }
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a PostgreSQL-backed server (requires DATABASE_URL)
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        let state = create_app_state(config).await?;
        Self::serve(create_app(state)).await
    }

    async fn serve(app: Router) -> Result<Self> {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }
}

/// Helper to check if test environment is available
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Decode the (unverified) claims segment of a JWT
pub fn decode_token_payload(token: &str) -> Result<Value> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        anyhow::bail!("Token does not have three segments: {token}");
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
