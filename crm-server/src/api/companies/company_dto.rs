use crm_core::Company;

use serde::Serialize;

/// Company DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct CompanyDto {
    pub id: i64,
    pub name: String,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Company> for CompanyDto {
    fn from(c: Company) -> Self {
        Self {
            id: c.id,
            name: c.name,
            industry: c.industry,
            website: c.website,
            phone: c.phone,
            email: c.email,
            address: c.address,
            description: c.description,
            created_at: c.created_at.timestamp(),
            updated_at: c.updated_at.timestamp(),
        }
    }
}
