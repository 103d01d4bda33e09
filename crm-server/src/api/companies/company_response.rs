use crate::CompanyDto;
use serde::Serialize;

/// Single company response
#[derive(Debug, Serialize)]
pub struct CompanyResponse {
    pub company: CompanyDto,
}
