pub mod claims;
pub mod error;
pub mod jwt_issuer;
pub mod login_rate_limiter;
pub mod password;
pub mod principal;
pub mod rate_limit_config;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_issuer::JwtIssuer;
pub use login_rate_limiter::LoginRateLimiter;
pub use password::PasswordHasher;
pub use principal::Principal;
pub use rate_limit_config::RateLimitConfig;
