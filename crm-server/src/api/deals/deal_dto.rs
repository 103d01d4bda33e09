use crm_core::Deal;

use serde::Serialize;

/// Deal DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct DealDto {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub value: Option<f64>,
    /// Pipeline stage, e.g. "negotiation"
    pub stage: String,
    pub company_id: Option<i64>,
    pub contact_ids: Vec<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Deal> for DealDto {
    fn from(d: Deal) -> Self {
        Self {
            id: d.id,
            title: d.title,
            description: d.description,
            value: d.value,
            stage: d.stage.as_str().to_string(),
            company_id: d.company_id,
            contact_ids: d.contact_ids,
            created_at: d.created_at.timestamp(),
            updated_at: d.updated_at.timestamp(),
        }
    }
}
