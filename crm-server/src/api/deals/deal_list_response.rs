use crate::DealDto;
use serde::Serialize;

/// One page of deals
#[derive(Debug, Serialize)]
pub struct DealListResponse {
    pub deals: Vec<DealDto>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}
