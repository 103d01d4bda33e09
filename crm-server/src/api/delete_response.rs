use serde::Serialize;

/// Response for DELETE endpoints
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted_id: i64,
}
