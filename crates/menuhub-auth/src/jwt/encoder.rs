//! Token issuing.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use menuhub_core::config::AuthConfig;
use menuhub_core::error::AppError;
use menuhub_entity::token::TokenPair;

use super::claims::{Claims, TokenType};

/// Mints HS256-signed access and refresh tokens.
///
/// Access tokens expire after the configured TTL. Refresh tokens carry no
/// `exp` claim; they stay valid until rotated or revoked in the token store.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    access_ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl", &self.access_ttl)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_ttl: Duration::minutes(config.access_ttl_minutes as i64),
        }
    }

    /// Mints a token pair for `user_id` at the current time.
    pub fn issue(&self, user_id: Uuid) -> Result<TokenPair, AppError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Mints a token pair as if the current time were `now`.
    pub fn issue_at(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<TokenPair, AppError> {
        let access = Claims {
            id: user_id,
            iat: now.timestamp(),
            exp: Some((now + self.access_ttl).timestamp()),
            jti: Uuid::new_v4(),
            token_type: TokenType::Access,
        };
        let refresh = Claims {
            id: user_id,
            iat: now.timestamp(),
            exp: None,
            jti: Uuid::new_v4(),
            token_type: TokenType::Refresh,
        };

        let access_token = encode(&Header::default(), &access, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;
        let refresh_token = encode(&Header::default(), &refresh, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode refresh token: {e}")))?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }
}
