//! End-to-end tests over HTTP against PostgreSQL
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test postgres_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, decode_token_payload, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["status"], "ready");
    assert_eq!(body["database"], true);
}

#[tokio::test]
async fn test_signup_and_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = AuthBody::unique();

    let response = server.post("/signup", &request).await.unwrap();
    let inserted: SignupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(uuid::Uuid::parse_str(&inserted.inserted_id).is_ok());

    let response = server.post("/login", &request).await.unwrap();
    let login: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let payload = decode_token_payload(&login.token).unwrap();
    assert_eq!(payload["number"], request.number.as_str());
}

#[tokio::test]
async fn test_signup_duplicate_number() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = AuthBody::unique();

    let response = server.post("/signup", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/signup", &request).await.unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert!(err.error.contains(&request.number));
}

#[tokio::test]
async fn test_concurrent_signups_create_one_account() {
    if !check_test_env() {
        return;
    }

    let server = std::sync::Arc::new(TestServer::start().await.expect("Failed to start server"));
    let request = AuthBody::unique();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let server = std::sync::Arc::clone(&server);
            let body = request.clone();
            tokio::spawn(async move { server.post("/signup", &body).await.unwrap().status() })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        let status = handle.await.unwrap();
        if status == StatusCode::CREATED {
            created += 1;
        } else {
            assert_eq!(status, StatusCode::CONFLICT);
        }
    }
    assert_eq!(created, 1);
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = AuthBody::unique();

    let response = server.post("/signup", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/login", &request.with_password("wrong password"))
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error, "Invalid Number or Password");
    assert!(err.err_msg.is_none());
}
