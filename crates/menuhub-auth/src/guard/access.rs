//! Bearer access-token guard for API routes.

use std::sync::Arc;

use uuid::Uuid;

use menuhub_core::error::AppError;
use menuhub_core::result::AppResult;

use crate::jwt::JwtDecoder;

/// Resolves the caller of a protected API request from its bearer token.
///
/// Stateless: the token store is never consulted, so an access token keeps
/// working until it expires even after logout.
#[derive(Debug, Clone)]
pub struct AccessGuard {
    decoder: Arc<JwtDecoder>,
}

impl AccessGuard {
    /// Creates a guard over the given decoder.
    pub fn new(decoder: Arc<JwtDecoder>) -> Self {
        Self { decoder }
    }

    /// Validates an `Authorization` header value and returns the user id.
    pub fn authenticate(&self, authorization: Option<&str>) -> AppResult<Uuid> {
        let header = authorization
            .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

        let token = header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::unauthorized("Invalid authorization header format"))?;

        let claims = self.decoder.decode_access_token(token)?;
        Ok(claims.user_id())
    }
}
