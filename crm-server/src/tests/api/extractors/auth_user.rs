use crate::{ApiError, AuthUser};
use crate::app_state::AppState;

use crm_auth::{JwtIssuer, LoginRateLimiter, PasswordHasher};

use std::sync::Arc;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use sqlx::SqlitePool;

const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

async fn create_test_state() -> AppState {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("../crates/crm-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    AppState {
        pool,
        jwt: Arc::new(JwtIssuer::with_hs256(SECRET, 3600)),
        hasher: PasswordHasher::new(),
        login_limiter: Arc::new(LoginRateLimiter::default()),
        frontend_origin: None,
    }
}

#[tokio::test]
async fn test_extractor_with_valid_bearer_token() {
    let state = create_test_state().await;
    let token = state.jwt.issue(42, "a@b.com", "A B").unwrap();

    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(result.is_ok());
    let principal = result.unwrap().0;
    assert_eq!(principal.user_id, 42);
    assert_eq!(principal.email, "a@b.com");
}

#[tokio::test]
async fn test_extractor_rejects_missing_header() {
    let state = create_test_state().await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_non_bearer_scheme() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_token_signed_with_other_secret() {
    let state = create_test_state().await;
    let other_issuer = JwtIssuer::with_hs256(b"another-secret-key-at-least-32-b", 3600);
    let token = other_issuer.issue(42, "a@b.com", "A B").unwrap();

    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_garbage_token() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header("Authorization", "Bearer not-a-jwt")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
