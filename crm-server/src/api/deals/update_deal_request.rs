use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDealRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub value: Option<f64>,

    #[serde(default)]
    pub stage: Option<String>,

    #[serde(default)]
    pub company_id: Option<i64>,

    /// Replaces the whole association set when present
    #[serde(default)]
    pub contact_ids: Option<Vec<i64>>,
}
