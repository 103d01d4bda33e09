//! Bearer-token guard for protected routes.

use crate::ApiError;
use crate::api::extractors::client_origin::client_origin;
use crate::app_state::AppState;

use crm_auth::{AuthError, Principal};

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use error_location::ErrorLocation;

const BEARER_PREFIX: &str = "Bearer ";

/// Extracts and verifies the bearer token, attaching the resolved
/// [`Principal`] to the handler.
///
/// Every rejection short-circuits with a uniform 401 before the handler
/// runs; the concrete failure reason and the caller's network origin go to
/// the server log only.
pub struct AuthUser(pub Principal);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let origin = client_origin(parts);

            match authenticate(parts, state) {
                Ok(principal) => {
                    log::info!("User {} authenticated successfully", principal.email);
                    Ok(AuthUser(principal))
                }
                Err(e) => {
                    log::warn!(
                        "Authentication failed for {}: {} ({})",
                        origin,
                        e,
                        e.reason_code()
                    );
                    Err(ApiError::Unauthorized {
                        message: "Invalid or expired token".to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    })
                }
            }
        }
    }
}

#[track_caller]
fn authenticate(parts: &Parts, state: &AppState) -> Result<Principal, AuthError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        })?;

    let header = header.to_str().map_err(|_| AuthError::InvalidToken {
        message: "Authorization header is not valid UTF-8".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let token = header
        .strip_prefix(BEARER_PREFIX)
        .ok_or(AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        })?;

    let claims = state.jwt.decode(token)?;

    Principal::from_claims(claims).ok_or(AuthError::InvalidClaim {
        claim: "sub".to_string(),
        message: "sub is not a numeric user id".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
