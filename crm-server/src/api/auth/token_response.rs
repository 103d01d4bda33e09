use serde::Serialize;

/// Successful login/registration response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}
