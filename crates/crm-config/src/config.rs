use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, CorsConfig, DatabaseConfig, LoggingConfig,
    RateLimitConfig, ServerConfig,
};

use std::path::PathBuf;
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
    pub rate_limit: RateLimitConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Load .env if present (development)
    /// 2. Check for CRM_CONFIG_DIR env var, else use ./.crm/
    /// 3. Auto-create config directory if it doesn't exist
    /// 4. Load config.toml if it exists, else use defaults
    /// 5. Apply CRM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let _ = dotenvy::dotenv();

        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: CRM_CONFIG_DIR env var > ./.crm/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("CRM_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".crm"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;
        self.rate_limit.validate()?;

        // Validate database path doesn't escape config dir
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  auth: HS256, token ttl {}s",
            self.auth.token_ttl_secs
        );
        info!(
            "  cors: {}",
            self.cors
                .frontend_origin
                .as_deref()
                .unwrap_or("permissive (dev)")
        );
        info!(
            "  rate limit: {} login attempts per {}s",
            self.rate_limit.max_attempts, self.rate_limit.window_secs
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("CRM_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("CRM_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("CRM_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_option_string("CRM_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("CRM_AUTH_TOKEN_TTL_SECS", &mut self.auth.token_ttl_secs);

        // CORS
        Self::apply_env_option_string("CRM_FRONTEND_ORIGIN", &mut self.cors.frontend_origin);

        // Logging
        Self::apply_env_parse("CRM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CRM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CRM_LOG_FILE", &mut self.logging.file);

        // Rate limit
        Self::apply_env_parse(
            "CRM_RATE_LIMIT_MAX_ATTEMPTS",
            &mut self.rate_limit.max_attempts,
        );
        Self::apply_env_parse(
            "CRM_RATE_LIMIT_WINDOW_SECS",
            &mut self.rate_limit.window_secs,
        );
    }

    fn apply_env_string(key: &str, target: &mut String) {
        if let Ok(value) = std::env::var(key) {
            *target = value;
        }
    }

    fn apply_env_option_string(key: &str, target: &mut Option<String>) {
        if let Ok(value) = std::env::var(key) {
            *target = Some(value);
        }
    }

    fn apply_env_parse<T: FromStr>(key: &str, target: &mut T) {
        if let Ok(value) = std::env::var(key) {
            if let Ok(parsed) = value.parse() {
                *target = parsed;
            } else {
                log::warn!("Ignoring unparseable env override {}={}", key, value);
            }
        }
    }

    fn apply_env_bool(key: &str, target: &mut bool) {
        if let Ok(value) = std::env::var(key) {
            if let Ok(parsed) = value.parse() {
                *target = parsed;
            }
        }
    }
}
