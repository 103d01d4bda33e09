use crm_db::StageTotal;

use serde::Serialize;

/// Aggregated CRM statistics
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub companies: i64,
    pub contacts: i64,
    pub deals: i64,
    pub users: i64,
    /// Summed value of deals still in the pipeline
    pub open_deal_value: f64,
    /// Summed value of closed-won deals
    pub won_deal_value: f64,
    pub deals_by_stage: Vec<StageTotalDto>,
}

#[derive(Debug, Serialize)]
pub struct StageTotalDto {
    pub stage: String,
    pub count: i64,
    pub value: f64,
}

impl From<StageTotal> for StageTotalDto {
    fn from(t: StageTotal) -> Self {
        Self {
            stage: t.stage.as_str().to_string(),
            count: t.count,
            value: t.value,
        }
    }
}
