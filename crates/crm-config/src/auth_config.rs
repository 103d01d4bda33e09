use crate::{ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_SECS, MIN_JWT_SECRET_BYTES};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret; required at startup
    pub jwt_secret: Option<String>,
    /// Access token lifetime in seconds
    pub token_ttl_secs: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.jwt_secret {
            None => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required (set CRM_AUTH_JWT_SECRET or config.toml)",
                ));
            }
            Some(ref secret) if secret.len() < MIN_JWT_SECRET_BYTES => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} bytes, got {}",
                    MIN_JWT_SECRET_BYTES,
                    secret.len()
                )));
            }
            Some(_) => {}
        }

        if self.token_ttl_secs <= 0 {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_secs must be positive, got {}",
                self.token_ttl_secs
            )));
        }

        Ok(())
    }
}
