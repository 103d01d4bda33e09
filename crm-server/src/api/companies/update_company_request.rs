use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateCompanyRequest {
    #[serde(default)]
    pub name: Option<String>,

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
