use crm_auth::{JwtIssuer, LoginRateLimiter, PasswordHasher};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state for all request handlers.
///
/// Everything here is read-only after startup; per-request state lives in
/// extractors.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt: Arc<JwtIssuer>,
    pub hasher: PasswordHasher,
    pub login_limiter: Arc<LoginRateLimiter>,
    /// CORS allow-list origin; None = permissive (dev)
    pub frontend_origin: Option<String>,
}
