//! Session lifecycle manager: login, refresh, and logout flows.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use menuhub_core::error::AppError;
use menuhub_core::result::AppResult;
use menuhub_entity::token::TokenPair;

use crate::credentials::CredentialVerifier;
use crate::jwt::{JwtDecoder, JwtEncoder};

use super::store::{Rotation, TokenStore};

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginGrant {
    /// The authenticated user.
    pub user_id: Uuid,
    /// Freshly minted tokens; the refresh token is already stored.
    pub tokens: TokenPair,
    /// The user's permitted page paths.
    pub permissions: Vec<String>,
}

/// Why a refresh token was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryReason {
    /// No token was presented.
    Missing,
    /// The token is not the current token of any record.
    NotInStore,
    /// The signature or claims did not validate.
    InvalidToken,
    /// A concurrent refresh rotated the record first.
    Superseded,
}

/// Result of a refresh attempt.
#[derive(Debug, Clone)]
pub enum RefreshOutcome {
    /// A new pair was minted and the stored token rotated.
    Refreshed {
        /// The user the session belongs to.
        user_id: Uuid,
        /// The new pair.
        tokens: TokenPair,
    },
    /// The client must log in again.
    Expired(ExpiryReason),
}

impl RefreshOutcome {
    /// Collapses expiry into the session-expired error.
    pub fn into_result(self) -> AppResult<(Uuid, TokenPair)> {
        match self {
            Self::Refreshed { user_id, tokens } => Ok((user_id, tokens)),
            Self::Expired(_) => Err(AppError::session_expired()),
        }
    }
}

/// Owns login, refresh-token rotation, and logout.
#[derive(Debug, Clone)]
pub struct SessionManager {
    verifier: CredentialVerifier,
    encoder: Arc<JwtEncoder>,
    decoder: Arc<JwtDecoder>,
    store: TokenStore,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(
        verifier: CredentialVerifier,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
        store: TokenStore,
    ) -> Self {
        Self {
            verifier,
            encoder,
            decoder,
            store,
        }
    }

    /// Verifies credentials and opens a new session.
    ///
    /// Any previous refresh token of the user stops working.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginGrant> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::validation("Please enter your email and password"));
        }

        let user = self.verifier.verify(email, password).await?;
        let tokens = self.encoder.issue(user.id)?;
        self.store
            .replace_for_user(user.id, &tokens.refresh_token)
            .await?;

        info!(user_id = %user.id, "Login successful");
        Ok(LoginGrant {
            user_id: user.id,
            tokens,
            permissions: user.effective_permissions(),
        })
    }

    /// Exchanges a refresh token for a new pair, rotating the stored token.
    pub async fn refresh(&self, refresh_token: Option<&str>) -> AppResult<RefreshOutcome> {
        let Some(refresh_token) = refresh_token.filter(|t| !t.is_empty()) else {
            return Ok(RefreshOutcome::Expired(ExpiryReason::Missing));
        };

        let Some(record) = self.store.find_by_token(refresh_token).await? else {
            warn!("Refresh token not found in store");
            return Ok(RefreshOutcome::Expired(ExpiryReason::NotInStore));
        };

        let claims = match self.decoder.decode_refresh_token(refresh_token) {
            Ok(claims) if claims.user_id() == record.user_id => claims,
            _ => {
                warn!(user_id = %record.user_id, "Stored refresh token failed validation");
                return Ok(RefreshOutcome::Expired(ExpiryReason::InvalidToken));
            }
        };

        let tokens = self.encoder.issue(claims.user_id())?;
        match self.store.rotate(&record, &tokens.refresh_token).await? {
            Rotation::Rotated(_) => {
                info!(user_id = %record.user_id, "Refresh token rotated");
                Ok(RefreshOutcome::Refreshed {
                    user_id: record.user_id,
                    tokens,
                })
            }
            Rotation::Superseded => Ok(RefreshOutcome::Expired(ExpiryReason::Superseded)),
        }
    }

    /// Ends every session of `user_id`.
    pub async fn logout(&self, user_id: Uuid) -> AppResult<()> {
        self.store.revoke_all_for_user(user_id).await?;
        info!(user_id = %user_id, "Logout completed");
        Ok(())
    }
}
