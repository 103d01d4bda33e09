//! Contact REST API handlers
//!
//! The API accepts first/last name parts; the stored record carries the
//! built display name.

use crate::{
    ApiError, ApiResult, AuthUser, ContactDto, ContactListResponse, ContactResponse,
    CreateContactRequest, DeleteResponse, ListQuery, UpdateContactRequest,
};
use crate::api::error::parse_id;
use crate::app_state::AppState;

use crm_db::{CompanyRepository, ContactRepository, NewContact};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use error_location::ErrorLocation;

/// POST /contacts
pub async fn create_contact(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
    Json(req): Json<CreateContactRequest>,
) -> ApiResult<(StatusCode, Json<ContactResponse>)> {
    let name = req.display_name();
    if name.is_empty() {
        return Err(ApiError::Validation {
            message: "First and last name are required".to_string(),
            field: Some("firstName".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // Verify the company association up front
    if let Some(company_id) = req.company_id {
        verify_company_exists(&state, company_id).await?;
    }

    let repo = ContactRepository::new(state.pool.clone());
    let contact = repo
        .create(&NewContact {
            name,
            email: req.email,
            phone: req.phone,
            position: req.position,
            company_id: req.company_id,
            notes: req.notes,
        })
        .await?;

    log::info!("Created contact {} via REST API", contact.id);

    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            contact: contact.into(),
        }),
    ))
}

/// GET /contacts
pub async fn list_contacts(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<ContactListResponse>> {
    let sort_column =
        ContactRepository::sort_column(&query.sort_by).ok_or_else(|| ApiError::Validation {
            message: format!("Unknown sort field: {}", query.sort_by),
            field: Some("sortBy".into()),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let repo = ContactRepository::new(state.pool.clone());
    let page = repo
        .find_page(query.page_params(), sort_column, query.order())
        .await?;

    Ok(Json(ContactListResponse {
        contacts: page.items.into_iter().map(ContactDto::from).collect(),
        total: page.total,
        page: page.page,
        limit: page.limit,
    }))
}

/// GET /contacts/{id}
pub async fn get_contact(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ContactResponse>> {
    let contact_id = parse_id(&id)?;

    let repo = ContactRepository::new(state.pool.clone());
    let contact = repo
        .find_by_id(contact_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Contact {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(ContactResponse {
        contact: contact.into(),
    }))
}

/// PATCH /contacts/{id}
pub async fn update_contact(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateContactRequest>,
) -> ApiResult<Json<ContactResponse>> {
    let contact_id = parse_id(&id)?;

    let repo = ContactRepository::new(state.pool.clone());
    let mut contact = repo
        .find_by_id(contact_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Contact {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if let Some(name) = req.display_name() {
        contact.name = name;
    }
    if let Some(email) = req.email {
        contact.email = Some(email);
    }
    if let Some(phone) = req.phone {
        contact.phone = Some(phone);
    }
    if let Some(position) = req.position {
        contact.position = Some(position);
    }
    if let Some(company_id) = req.company_id {
        verify_company_exists(&state, company_id).await?;
        contact.company_id = Some(company_id);
    }
    if let Some(notes) = req.notes {
        contact.notes = Some(notes);
    }
    contact.updated_at = Utc::now();

    repo.update(&contact).await?;

    log::info!("Updated contact {} via REST API", contact_id);

    Ok(Json(ContactResponse {
        contact: contact.into(),
    }))
}

/// DELETE /contacts/{id}
pub async fn delete_contact(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let contact_id = parse_id(&id)?;

    let repo = ContactRepository::new(state.pool.clone());
    let deleted = repo.delete(contact_id).await?;

    if !deleted {
        return Err(ApiError::NotFound {
            message: format!("Contact {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("Deleted contact {} via REST API", contact_id);

    Ok(Json(DeleteResponse {
        deleted_id: contact_id,
    }))
}

async fn verify_company_exists(state: &AppState, company_id: i64) -> ApiResult<()> {
    let companies = CompanyRepository::new(state.pool.clone());
    companies
        .find_by_id(company_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Company {} not found", company_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(())
}
