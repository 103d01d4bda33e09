use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A person attached to the CRM, optionally associated with a company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    /// Display name, built from first/last name parts at the API boundary
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Job position, e.g. "Sales Manager"
    pub position: Option<String>,
    pub company_id: Option<i64>,
    pub notes: Option<String>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
