//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Placeholder secret shipped in `config/default.toml`.
pub const INSECURE_DEFAULT_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256). Shared by access and refresh tokens.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Max-age of the refresh-token cookie set at login, in days.
    #[serde(default = "default_cookie_max_age")]
    pub refresh_cookie_max_age_days: i64,
    /// Minimum password length for created/updated users.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl AuthConfig {
    /// Whether the signing secret is still the shipped placeholder.
    pub fn uses_insecure_secret(&self) -> bool {
        self.jwt_secret == INSECURE_DEFAULT_SECRET
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            access_ttl_minutes: default_access_ttl(),
            refresh_cookie_max_age_days: default_cookie_max_age(),
            password_min_length: default_password_min(),
        }
    }
}

fn default_jwt_secret() -> String {
    INSECURE_DEFAULT_SECRET.to_string()
}

fn default_access_ttl() -> u64 {
    5
}

fn default_cookie_max_age() -> i64 {
    30
}

fn default_password_min() -> usize {
    8
}
