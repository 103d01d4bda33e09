use crm_core::build_display_name;

use serde::Deserialize;

/// Required fields default to empty and are validated in the handler so
/// missing input surfaces as a 400 validation error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,
}

impl CreateUserRequest {
    pub fn display_name(&self) -> String {
        build_display_name(Some(&self.first_name), Some(&self.last_name)).unwrap_or_default()
    }
}
