#![allow(dead_code)]

//! Test infrastructure for crm-server API tests

use crm_auth::{JwtIssuer, LoginRateLimiter, PasswordHasher, RateLimitConfig};
use crm_server::AppState;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/crm-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;

    AppState {
        pool,
        jwt: Arc::new(JwtIssuer::with_hs256(TEST_SECRET, 3600)),
        hasher: PasswordHasher::new(),
        login_limiter: Arc::new(LoginRateLimiter::new(RateLimitConfig {
            max_attempts: 100,
            window_secs: 60,
        })),
        frontend_origin: None,
    }
}

/// Send a request with an optional bearer token and JSON body
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<axum::body::Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

/// Collect a response body as JSON
pub async fn read_json(response: Response<axum::body::Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Register a user through the API and return its access token
pub async fn register_user(app: &Router, email: &str, password: &str) -> String {
    let response = send(
        app,
        "POST",
        "/auth/register",
        None,
        Some(serde_json::json!({
            "email": email,
            "password": password,
            "firstName": "Test",
            "lastName": "User",
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = read_json(response).await;
    json["access_token"].as_str().unwrap().to_string()
}
