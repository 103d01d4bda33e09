//! Dashboard statistics handler

use crate::api::dashboard::dashboard_response::{DashboardResponse, StageTotalDto};
use crate::{ApiResult, AuthUser};
use crate::app_state::AppState;

use crm_core::DealStage;
use crm_db::{CompanyRepository, ContactRepository, DealRepository, UserRepository};

use axum::{Json, extract::State};

/// GET /dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
) -> ApiResult<Json<DashboardResponse>> {
    let companies = CompanyRepository::new(state.pool.clone()).count().await?;
    let contacts = ContactRepository::new(state.pool.clone()).count().await?;
    let users = UserRepository::new(state.pool.clone()).count().await?;

    let deal_repo = DealRepository::new(state.pool.clone());
    let deals = deal_repo.count().await?;
    let totals = deal_repo.stage_totals().await?;

    let won_deal_value = totals
        .iter()
        .filter(|t| t.stage == DealStage::ClosedWon)
        .map(|t| t.value)
        .sum();
    let open_deal_value = totals
        .iter()
        .filter(|t| !matches!(t.stage, DealStage::ClosedWon | DealStage::ClosedLost))
        .map(|t| t.value)
        .sum();

    Ok(Json(DashboardResponse {
        companies,
        contacts,
        deals,
        users,
        open_deal_value,
        won_deal_value,
        deals_by_stage: totals.into_iter().map(StageTotalDto::from).collect(),
    }))
}
