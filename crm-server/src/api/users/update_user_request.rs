use crm_core::build_display_name;

use serde::Deserialize;

/// Email/name update only; password change is not exposed.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,
}

impl UpdateUserRequest {
    /// New display name, or `None` when neither part was supplied
    pub fn display_name(&self) -> Option<String> {
        build_display_name(self.first_name.as_deref(), self.last_name.as_deref())
    }
}
