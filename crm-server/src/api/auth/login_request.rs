use serde::Deserialize;

/// Missing fields deserialize to empty strings and fail credential
/// validation, producing the same uniform 401 as wrong credentials.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,
}
