//! Deal REST API handlers

use crate::{
    ApiError, ApiResult, AuthUser, CreateDealRequest, DealDto, DealListResponse, DealResponse,
    DeleteResponse, ListQuery, UpdateDealRequest,
};
use crate::api::error::parse_id;
use crate::app_state::AppState;

use crm_core::DealStage;
use crm_db::{DealRepository, NewDeal};

use std::panic::Location;
use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use error_location::ErrorLocation;

/// POST /deals
pub async fn create_deal(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
    Json(req): Json<CreateDealRequest>,
) -> ApiResult<(StatusCode, Json<DealResponse>)> {
    if req.title.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "Deal title is required".to_string(),
            field: Some("title".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let stage = match req.stage {
        Some(ref raw) => parse_stage(raw)?,
        None => DealStage::default(),
    };

    let repo = DealRepository::new(state.pool.clone());
    let deal = repo
        .create(&NewDeal {
            title: req.title.trim().to_string(),
            description: req.description,
            value: req.value,
            stage,
            company_id: req.company_id,
            contact_ids: req.contact_ids,
        })
        .await?;

    log::info!("Created deal {} via REST API", deal.id);

    Ok((StatusCode::CREATED, Json(DealResponse { deal: deal.into() })))
}

/// GET /deals
pub async fn list_deals(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<DealListResponse>> {
    let sort_column =
        DealRepository::sort_column(&query.sort_by).ok_or_else(|| ApiError::Validation {
            message: format!("Unknown sort field: {}", query.sort_by),
            field: Some("sortBy".into()),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let repo = DealRepository::new(state.pool.clone());
    let page = repo
        .find_page(query.page_params(), sort_column, query.order())
        .await?;

    Ok(Json(DealListResponse {
        deals: page.items.into_iter().map(DealDto::from).collect(),
        total: page.total,
        page: page.page,
        limit: page.limit,
    }))
}

/// GET /deals/{id}
pub async fn get_deal(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DealResponse>> {
    let deal_id = parse_id(&id)?;

    let repo = DealRepository::new(state.pool.clone());
    let deal = repo
        .find_by_id(deal_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Deal {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(DealResponse { deal: deal.into() }))
}

/// PATCH /deals/{id}
pub async fn update_deal(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateDealRequest>,
) -> ApiResult<Json<DealResponse>> {
    let deal_id = parse_id(&id)?;

    let repo = DealRepository::new(state.pool.clone());
    let mut deal = repo
        .find_by_id(deal_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Deal {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if let Some(title) = req.title {
        if title.trim().is_empty() {
            return Err(ApiError::Validation {
                message: "Deal title cannot be empty".to_string(),
                field: Some("title".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        deal.title = title.trim().to_string();
    }
    if let Some(description) = req.description {
        deal.description = Some(description);
    }
    if let Some(value) = req.value {
        deal.value = Some(value);
    }
    if let Some(ref raw) = req.stage {
        deal.stage = parse_stage(raw)?;
    }
    if let Some(company_id) = req.company_id {
        deal.company_id = Some(company_id);
    }
    if let Some(contact_ids) = req.contact_ids {
        deal.contact_ids = contact_ids;
    }
    deal.updated_at = Utc::now();

    repo.update(&deal).await?;

    log::info!("Updated deal {} via REST API", deal_id);

    Ok(Json(DealResponse { deal: deal.into() }))
}

/// DELETE /deals/{id}
pub async fn delete_deal(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let deal_id = parse_id(&id)?;

    let repo = DealRepository::new(state.pool.clone());
    let deleted = repo.delete(deal_id).await?;

    if !deleted {
        return Err(ApiError::NotFound {
            message: format!("Deal {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("Deleted deal {} via REST API", deal_id);

    Ok(Json(DeleteResponse { deleted_id: deal_id }))
}

#[track_caller]
fn parse_stage(raw: &str) -> ApiResult<DealStage> {
    DealStage::from_str(raw).map_err(|_| ApiError::Validation {
        message: format!("Unknown deal stage: {}", raw),
        field: Some("stage".into()),
        location: ErrorLocation::from(Location::caller()),
    })
}
