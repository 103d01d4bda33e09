use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateCompanyRequest {
    /// Company name (required)
    pub name: String,

    #[serde(default)]
    pub industry: Option<String>,

    #[serde(default)]
    pub website: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}
