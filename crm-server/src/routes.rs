use crate::api::auth::auth;
use crate::api::companies::companies;
use crate::api::contacts::contacts;
use crate::api::dashboard::dashboard;
use crate::api::deals::deals;
use crate::api::users::users;
use crate::app_state::AppState;
use crate::health;

use axum::{
    Router,
    http::HeaderValue,
    http::Method,
    http::header::{AUTHORIZATION, CONTENT_TYPE},
    routing::get,
    routing::post,
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(state.frontend_origin.as_deref());

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Authentication
        .route("/auth/login", post(auth::login))
        .route("/auth/register", post(auth::register))
        .route("/auth/profile", get(auth::profile))
        // Companies
        .route(
            "/companies",
            get(companies::list_companies).post(companies::create_company),
        )
        .route(
            "/companies/{id}",
            get(companies::get_company)
                .patch(companies::update_company)
                .delete(companies::delete_company),
        )
        // Contacts
        .route(
            "/contacts",
            get(contacts::list_contacts).post(contacts::create_contact),
        )
        .route(
            "/contacts/{id}",
            get(contacts::get_contact)
                .patch(contacts::update_contact)
                .delete(contacts::delete_contact),
        )
        // Deals
        .route("/deals", get(deals::list_deals).post(deals::create_deal))
        .route(
            "/deals/{id}",
            get(deals::get_deal)
                .patch(deals::update_deal)
                .delete(deals::delete_deal),
        )
        // Users
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
        // Dashboard
        .route("/dashboard", get(dashboard::get_dashboard))
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(cors)
}

/// Allow-list the configured frontend origin; fall back to a permissive
/// layer when none is configured (development mode).
fn cors_layer(frontend_origin: Option<&str>) -> CorsLayer {
    match frontend_origin.and_then(|o| o.parse::<HeaderValue>().ok()) {
        // Credentials cannot be combined with wildcards, so the
        // allow-listed branch names its methods and headers explicitly
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([AUTHORIZATION, CONTENT_TYPE])
            .allow_credentials(true),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    }
}
