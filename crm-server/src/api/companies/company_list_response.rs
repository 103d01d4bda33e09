use crate::CompanyDto;
use serde::Serialize;

/// One page of companies
#[derive(Debug, Serialize)]
pub struct CompanyListResponse {
    pub companies: Vec<CompanyDto>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}
