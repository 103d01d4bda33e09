use crm_core::build_display_name;

use serde::Deserialize;

/// Registration accepts either a pre-built `name` or `firstName` +
/// `lastName` parts.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Required; absence is rejected with a validation error, not a
    /// body-deserialization failure
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,
}

impl RegisterRequest {
    /// Display name for the new account; an explicit `name` wins over the
    /// first/last parts.
    pub fn display_name(&self) -> String {
        if let Some(ref name) = self.name {
            let name = name.trim();
            if !name.is_empty() {
                return name.to_string();
            }
        }

        build_display_name(self.first_name.as_deref(), self.last_name.as_deref())
            .unwrap_or_default()
    }
}
