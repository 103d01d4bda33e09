use serde::Deserialize;

/// CORS allow-list. When `frontend_origin` is unset the server falls back
/// to a permissive layer (development mode).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct CorsConfig {
    pub frontend_origin: Option<String>,
}
