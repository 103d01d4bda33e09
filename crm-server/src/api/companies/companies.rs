//! Company REST API handlers

use crate::{
    ApiError, ApiResult, AuthUser, CompanyDto, CompanyListResponse, CompanyResponse,
    CreateCompanyRequest, DeleteResponse, ListQuery, UpdateCompanyRequest,
};
use crate::api::error::parse_id;
use crate::app_state::AppState;

use crm_db::{CompanyRepository, NewCompany};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use error_location::ErrorLocation;

/// POST /companies
pub async fn create_company(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
    Json(req): Json<CreateCompanyRequest>,
) -> ApiResult<(StatusCode, Json<CompanyResponse>)> {
    if req.name.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "Company name is required".to_string(),
            field: Some("name".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let repo = CompanyRepository::new(state.pool.clone());
    let company = repo
        .create(&NewCompany {
            name: req.name.trim().to_string(),
            industry: req.industry,
            website: req.website,
            phone: req.phone,
            email: req.email,
            address: req.address,
            description: req.description,
        })
        .await?;

    log::info!("Created company {} via REST API", company.id);

    Ok((
        StatusCode::CREATED,
        Json(CompanyResponse {
            company: company.into(),
        }),
    ))
}

/// GET /companies
pub async fn list_companies(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<CompanyListResponse>> {
    let sort_column =
        CompanyRepository::sort_column(&query.sort_by).ok_or_else(|| ApiError::Validation {
            message: format!("Unknown sort field: {}", query.sort_by),
            field: Some("sortBy".into()),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let repo = CompanyRepository::new(state.pool.clone());
    let page = repo
        .find_page(query.page_params(), sort_column, query.order())
        .await?;

    Ok(Json(CompanyListResponse {
        companies: page.items.into_iter().map(CompanyDto::from).collect(),
        total: page.total,
        page: page.page,
        limit: page.limit,
    }))
}

/// GET /companies/{id}
pub async fn get_company(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<CompanyResponse>> {
    let company_id = parse_id(&id)?;

    let repo = CompanyRepository::new(state.pool.clone());
    let company = repo
        .find_by_id(company_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Company {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(CompanyResponse {
        company: company.into(),
    }))
}

/// PATCH /companies/{id}
pub async fn update_company(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateCompanyRequest>,
) -> ApiResult<Json<CompanyResponse>> {
    let company_id = parse_id(&id)?;

    let repo = CompanyRepository::new(state.pool.clone());
    let mut company = repo
        .find_by_id(company_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Company {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if let Some(name) = req.name {
        if name.trim().is_empty() {
            return Err(ApiError::Validation {
                message: "Company name cannot be empty".to_string(),
                field: Some("name".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        company.name = name.trim().to_string();
    }
    if let Some(industry) = req.industry {
        company.industry = Some(industry);
    }
    if let Some(website) = req.website {
        company.website = Some(website);
    }
    if let Some(phone) = req.phone {
        company.phone = Some(phone);
    }
    if let Some(email) = req.email {
        company.email = Some(email);
    }
    if let Some(address) = req.address {
        company.address = Some(address);
    }
    if let Some(description) = req.description {
        company.description = Some(description);
    }
    company.updated_at = Utc::now();

    repo.update(&company).await?;

    log::info!("Updated company {} via REST API", company_id);

    Ok(Json(CompanyResponse {
        company: company.into(),
    }))
}

/// DELETE /companies/{id}
pub async fn delete_company(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let company_id = parse_id(&id)?;

    let repo = CompanyRepository::new(state.pool.clone());
    let deleted = repo.delete(company_id).await?;

    if !deleted {
        return Err(ApiError::NotFound {
            message: format!("Company {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("Deleted company {} via REST API", company_id);

    Ok(Json(DeleteResponse {
        deleted_id: company_id,
    }))
}
