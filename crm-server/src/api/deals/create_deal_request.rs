use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDealRequest {
    /// Deal title (required)
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Deal value in dollars
    #[serde(default)]
    pub value: Option<f64>,

    /// Pipeline stage; defaults to "lead"
    #[serde(default)]
    pub stage: Option<String>,

    #[serde(default)]
    pub company_id: Option<i64>,

    /// Associated contact ids
    #[serde(default)]
    pub contact_ids: Vec<i64>,
}
