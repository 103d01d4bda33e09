//! User REST API handlers
//!
//! Administrative user creation hashes the password the same way
//! registration does; updates can never touch the password column.

use crate::{
    ApiError, ApiResult, AuthUser, CreateUserRequest, DeleteResponse, UpdateUserRequest, UserDto,
    UserListResponse, UserResponse,
};
use crate::api::error::parse_id;
use crate::app_state::AppState;

use crm_db::{NewUser, UserRepository};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use error_location::ErrorLocation;

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    if req.email.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "Email is required".to_string(),
            field: Some("email".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if req.password.is_empty() {
        return Err(ApiError::Validation {
            message: "Password is required".to_string(),
            field: Some("password".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let name = req.display_name();
    if name.is_empty() {
        return Err(ApiError::Validation {
            message: "First and last name are required".to_string(),
            field: Some("firstName".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let hasher = state.hasher;
    let plaintext = req.password.clone();
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

    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .create(&NewUser {
            email: req.email.clone(),
            name,
            password: hashed,
        })
        .await
        .map_err(|e| match e {
            crm_db::DbError::UniqueViolation { .. } => ApiError::Conflict {
                message: format!("Email {} is already registered", req.email),
                location: ErrorLocation::from(Location::caller()),
            },
            other => other.into(),
        })?;

    log::info!("Created user {} via REST API", user.id);

    Ok((StatusCode::CREATED, Json(UserResponse { user: user.into() })))
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
) -> ApiResult<Json<UserListResponse>> {
    let repo = UserRepository::new(state.pool.clone());
    let users = repo.find_all().await?;

    Ok(Json(UserListResponse {
        users: users.into_iter().map(UserDto::from).collect(),
    }))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = parse_id(&id)?;

    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("User {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// PATCH /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = parse_id(&id)?;

    let repo = UserRepository::new(state.pool.clone());
    let mut user = repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("User {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if let Some(email) = req.email.clone() {
        user.email = email;
    }
    if let Some(name) = req.display_name() {
        user.name = name;
    }
    user.updated_at = Utc::now();

    repo.update(&user).await.map_err(|e| match e {
        crm_db::DbError::UniqueViolation { .. } => ApiError::Conflict {
            message: format!("Email {} is already registered", user.email),
            location: ErrorLocation::from(Location::caller()),
        },
        other => other.into(),
    })?;

    log::info!("Updated user {} via REST API", user_id);

    Ok(Json(UserResponse { user: user.into() }))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let user_id = parse_id(&id)?;

    let repo = UserRepository::new(state.pool.clone());
    let deleted = repo.delete(user_id).await?;

    if !deleted {
        return Err(ApiError::NotFound {
            message: format!("User {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("Deleted user {} via REST API", user_id);

    Ok(Json(DeleteResponse { deleted_id: user_id }))
}
