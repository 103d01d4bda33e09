//! Integration tests for company API handlers
mod common;

use crate::common::{create_test_app_state, read_json, register_user, send};

use crm_server::routes::build_router;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_companies_require_authentication() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let response = send(&app, "GET", "/companies", None, None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_company_returns_201() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());
    let token = register_user(&app, "a@b.com", "Secret1!").await;

    let response = send(
        &app,
        "POST",
        "/companies",
        Some(&token),
        Some(json!({
            "name": "Acme Corporation",
            "industry": "Technology",
            "website": "https://www.acme.com",
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    assert_eq!(body["company"]["name"], "Acme Corporation");
    assert_eq!(body["company"]["industry"], "Technology");
}

#[tokio::test]
async fn test_create_company_without_name_rejected() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());
    let token = register_user(&app, "a@b.com", "Secret1!").await;

    let response = send(
        &app,
        "POST",
        "/companies",
        Some(&token),
        Some(json!({"name": "  ", "industry": "Technology"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "name");
}

#[tokio::test]
async fn test_list_companies_empty() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());
    let token = register_user(&app, "a@b.com", "Secret1!").await;

    let response = send(&app, "GET", "/companies", Some(&token), None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["companies"].as_array().unwrap().len(), 0);
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_list_companies_pages_and_sorts() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());
    let token = register_user(&app, "a@b.com", "Secret1!").await;

    for i in 0..15 {
        let response = send(
            &app,
            "POST",
            "/companies",
            Some(&token),
            Some(json!({"name": format!("Company {:02}", i)})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = send(
        &app,
        "GET",
        "/companies?page=2&limit=10&sortBy=name&sortOrder=ASC",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["total"], 15);
    assert_eq!(body["page"], 2);
    let companies = body["companies"].as_array().unwrap();
    assert_eq!(companies.len(), 5);
    assert_eq!(companies[0]["name"], "Company 10");
}

#[tokio::test]
async fn test_list_companies_with_unknown_sort_field_rejected() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());
    let token = register_user(&app, "a@b.com", "Secret1!").await;

    let response = send(
        &app,
        "GET",
        "/companies?sortBy=password",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_company_not_found() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());
    let token = register_user(&app, "a@b.com", "Secret1!").await;

    let response = send(&app, "GET", "/companies/9999", Some(&token), None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_company_invalid_id() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());
    let token = register_user(&app, "a@b.com", "Secret1!").await;

    let response = send(&app, "GET", "/companies/not-a-number", Some(&token), None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_company_persists_changes() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());
    let token = register_user(&app, "a@b.com", "Secret1!").await;

    let created = read_json(
        send(
            &app,
            "POST",
            "/companies",
            Some(&token),
            Some(json!({"name": "Acme"})),
        )
        .await,
    )
    .await;
    let id = created["company"]["id"].as_i64().unwrap();

    let response = send(
        &app,
        "PATCH",
        &format!("/companies/{}", id),
        Some(&token),
        Some(json!({"name": "Acme Corporation", "phone": "+1 (555) 123-4567"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["company"]["name"], "Acme Corporation");
    assert_eq!(body["company"]["phone"], "+1 (555) 123-4567");
}

#[tokio::test]
async fn test_delete_company_then_lookup_fails() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());
    let token = register_user(&app, "a@b.com", "Secret1!").await;

    let created = read_json(
        send(
            &app,
            "POST",
            "/companies",
            Some(&token),
            Some(json!({"name": "Acme"})),
        )
        .await,
    )
    .await;
    let id = created["company"]["id"].as_i64().unwrap();

    let response = send(
        &app,
        "DELETE",
        &format!("/companies/{}", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["deleted_id"], id);

    let response = send(&app, "GET", &format!("/companies/{}", id), Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
