use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_RATE_LIMIT_MAX_ATTEMPTS,
    DEFAULT_RATE_LIMIT_WINDOW_SECS,
};

use serde::Deserialize;

/// Login endpoint throttle
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub max_attempts: u32,
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_RATE_LIMIT_MAX_ATTEMPTS,
            window_secs: DEFAULT_RATE_LIMIT_WINDOW_SECS,
        }
    }
}

impl RateLimitConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_attempts == 0 {
            return Err(ConfigError::config(
                "rate_limit.max_attempts must be positive",
            ));
        }
        if self.window_secs == 0 {
            return Err(ConfigError::config(
                "rate_limit.window_secs must be positive",
            ));
        }

        Ok(())
    }
}
