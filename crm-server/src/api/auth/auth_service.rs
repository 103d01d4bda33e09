//! Credential validation, token issuance, and registration.
//!
//! The public login endpoint goes through [`AuthService::login_with_credentials`],
//! which always re-validates. [`AuthService::issue_token_for`] trusts an
//! already-validated identity and is what registration uses internally; the
//! two paths are deliberately separate.

use crate::api::error::{ApiError, Result as ApiResult};
use crate::app_state::AppState;

use crm_auth::JwtIssuer;
use crm_auth::PasswordHasher;
use crm_core::User;
use crm_db::{NewUser, UserRepository};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;

use super::token_response::TokenResponse;

pub struct AuthService {
    pool: sqlx::SqlitePool,
    jwt: Arc<JwtIssuer>,
    hasher: PasswordHasher,
}

impl AuthService {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            pool: state.pool.clone(),
            jwt: state.jwt.clone(),
            hasher: state.hasher,
        }
    }

    /// Look the user up by exact email and verify the password.
    ///
    /// Unknown email and wrong password both return `None`, so callers
    /// cannot tell which emails are registered. Verification runs on the
    /// blocking pool; bcrypt is CPU-bound.
    pub async fn validate_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> ApiResult<Option<User>> {
        let repo = UserRepository::new(self.pool.clone());
        let Some(user) = repo.find_by_email(email).await? else {
            return Ok(None);
        };

        let hasher = self.hasher;
        let password = password.to_string();
        let stored_hash = user.password.clone();
        let verified = tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
            .await
            .map_err(|e| ApiError::Internal {
                message: format!("Password verification task failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(verified.then_some(user))
    }

    /// Public login path: validate, then issue
    pub async fn login_with_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> ApiResult<TokenResponse> {
        let user = self
            .validate_credentials(email, password)
            .await?
            .ok_or_else(|| ApiError::Unauthorized {
                message: "Invalid credentials".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.issue_token_for(&user)
    }

    /// Trusted path: sign a token for an already-validated identity.
    /// No credential re-check.
    pub fn issue_token_for(&self, user: &User) -> ApiResult<TokenResponse> {
        let access_token = self
            .jwt
            .issue(user.id, &user.email, &user.name)
            .map_err(|e| {
                // Never hand the raw signing error back to the caller
                log::error!("Token issuance failed for user {}: {}", user.id, e);
                ApiError::Internal {
                    message: "Token issuance failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        Ok(TokenResponse { access_token })
    }

    /// Create an account and log it in, fused into one round trip.
    ///
    /// Rejects before any hashing or store write when the password is
    /// missing; a duplicate email surfaces as a 409 conflict.
    pub async fn register(&self, email: &str, password: &str, name: &str) -> ApiResult<TokenResponse> {
        if email.trim().is_empty() {
            return Err(ApiError::Validation {
                message: "Email is required".to_string(),
                field: Some("email".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if password.is_empty() {
            return Err(ApiError::Validation {
                message: "Password is required".to_string(),
                field: Some("password".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let hasher = self.hasher;
        let plaintext = password.to_string();
        let hashed = tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| ApiError::Internal {
                message: format!("Password hashing task failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?
            .map_err(|e| {
                log::error!("Password hashing failed: {}", e);
                ApiError::Internal {
                    message: "Password hashing failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        let repo = UserRepository::new(self.pool.clone());
        let user = repo
            .create(&NewUser {
                email: email.to_string(),
                name: name.to_string(),
                password: hashed,
            })
            .await
            .map_err(|e| match e {
                crm_db::DbError::UniqueViolation { .. } => ApiError::Conflict {
                    message: format!("Email {} is already registered", email),
                    location: ErrorLocation::from(Location::caller()),
                },
                other => other.into(),
            })?;

        self.issue_token_for(&user)
    }

    /// Current profile for the authenticated email claim.
    ///
    /// Re-fetches from the store rather than trusting the embedded claims,
    /// so the response reflects the stored name/email, not a snapshot from
    /// token-issue time.
    pub async fn profile(&self, email: &str) -> ApiResult<User> {
        let repo = UserRepository::new(self.pool.clone());
        repo.find_by_email(email)
            .await?
            .ok_or_else(|| ApiError::NotFound {
                message: format!("User {} not found", email),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
