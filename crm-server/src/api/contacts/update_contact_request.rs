use crm_core::build_display_name;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactRequest {
    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub position: Option<String>,

    #[serde(default)]
    pub company_id: Option<i64>,

    #[serde(default)]
    pub notes: Option<String>,
}

impl UpdateContactRequest {
    /// New display name, or `None` when neither part was supplied
    pub fn display_name(&self) -> Option<String> {
        build_display_name(self.first_name.as_deref(), self.last_name.as_deref())
    }
}
