//! Token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use menuhub_core::config::AuthConfig;
use menuhub_core::error::AppError;

use super::claims::{Claims, TokenType};

/// Validates the signature and claims of access and refresh tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    access_validation: Validation,
    refresh_validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("access_validation", &self.access_validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut access_validation = Validation::new(Algorithm::HS256);
        access_validation.validate_exp = true;
        access_validation.leeway = 5; // seconds of clock skew

        let mut refresh_validation = Validation::new(Algorithm::HS256);
        refresh_validation.validate_exp = false;
        refresh_validation.required_spec_claims.clear();

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_validation,
            refresh_validation,
        }
    }

    /// Decodes a bearer access token.
    ///
    /// Expired, tampered, or refresh tokens are all `Unauthorized`.
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_with(token, &self.access_validation)?;
        if claims.token_type != TokenType::Access {
            return Err(AppError::unauthorized(
                "Invalid token type: expected access token",
            ));
        }
        Ok(claims)
    }

    /// Decodes a refresh token. Only signature and type are checked.
    pub fn decode_refresh_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_with(token, &self.refresh_validation)?;
        if claims.token_type != TokenType::Refresh {
            return Err(AppError::unauthorized(
                "Invalid token type: expected refresh token",
            ));
        }
        Ok(claims)
    }

    fn decode_with(&self, token: &str, validation: &Validation) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::unauthorized("Token has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::unauthorized("Invalid token signature")
                }
                _ => AppError::unauthorized("Invalid token"),
            })
    }
}
