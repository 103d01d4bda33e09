use crm_core::build_display_name;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    pub first_name: String,
    pub last_name: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    /// Job position, e.g. "Sales Manager"
    #[serde(default)]
    pub position: Option<String>,

    #[serde(default)]
    pub company_id: Option<i64>,

    #[serde(default)]
    pub notes: Option<String>,
}

impl CreateContactRequest {
    pub fn display_name(&self) -> String {
        build_display_name(Some(&self.first_name), Some(&self.last_name)).unwrap_or_default()
    }
}
