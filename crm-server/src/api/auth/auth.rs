//! Authentication REST API handlers

use crate::api::auth::auth_service::AuthService;
use crate::api::auth::login_request::LoginRequest;
use crate::api::auth::register_request::RegisterRequest;
use crate::api::auth::token_response::TokenResponse;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::auth_user::AuthUser;
use crate::api::extractors::client_origin::ClientOrigin;
use crate::api::users::user_dto::UserDto;
use crate::app_state::AppState;

use std::panic::Location;

use axum::{Json, extract::State, http::StatusCode};
use error_location::ErrorLocation;

/// POST /auth/login
///
/// Local strategy: credentials travel in the body and are validated before
/// any controller logic; failure is a uniform 401.
pub async fn login(
    State(state): State<AppState>,
    ClientOrigin(origin): ClientOrigin,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    if let Err(e) = state.login_limiter.check(&origin) {
        log::warn!("Login rate limit hit for {}: {}", origin, e);
        return Err(ApiError::RateLimited {
            message: "Too many login attempts".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let service = AuthService::from_state(&state);
    let token = service
        .login_with_credentials(&req.email, &req.password)
        .await
        .inspect_err(|_| {
            log::warn!("Login failed for {} from {}", req.email, origin);
        })?;

    log::info!("User {} logged in", req.email);

    Ok(Json(token))
}

/// POST /auth/register
///
/// Creates the account and immediately logs it in; the response carries a
/// fresh access token.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<TokenResponse>)> {
    let name = req.display_name();

    let service = AuthService::from_state(&state);
    let token = service.register(&req.email, &req.password, &name).await?;

    log::info!("Registered user {}", req.email);

    Ok((StatusCode::CREATED, Json(token)))
}

/// GET /auth/profile
///
/// Returns the authenticated user's current stored profile, re-fetched by
/// the email claim. Never includes the password field.
pub async fn profile(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
) -> ApiResult<Json<UserDto>> {
    let service = AuthService::from_state(&state);
    let user = service.profile(&principal.email).await?;

    Ok(Json(user.into()))
}
