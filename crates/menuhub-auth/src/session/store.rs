//! Token store: the single active refresh token per user.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use menuhub_core::result::AppResult;
use menuhub_database::TokenRepository;
use menuhub_entity::token::TokenRecord;

/// Result of rotating a token record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rotation {
    /// The record now holds the new refresh token.
    Rotated(TokenRecord),
    /// Another rotation or a logout got there first.
    Superseded,
}

/// Wraps the token repository with the session-level operations.
#[derive(Debug, Clone)]
pub struct TokenStore {
    tokens: Arc<dyn TokenRepository>,
}

impl TokenStore {
    /// Creates a store over the given repository.
    pub fn new(tokens: Arc<dyn TokenRepository>) -> Self {
        Self { tokens }
    }

    /// The record owned by `user_id`, if any.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<TokenRecord>> {
        self.tokens.find_by_user(user_id).await
    }

    /// The record currently holding `refresh_token`, if any.
    pub async fn find_by_token(&self, refresh_token: &str) -> AppResult<Option<TokenRecord>> {
        self.tokens.find_by_token(refresh_token).await
    }

    /// Drops any previous record of `user_id` and stores `refresh_token`.
    pub async fn replace_for_user(
        &self,
        user_id: Uuid,
        refresh_token: &str,
    ) -> AppResult<TokenRecord> {
        self.tokens.replace_for_user(user_id, refresh_token).await
    }

    /// Swaps the record's refresh token for `new_token` if it is unchanged.
    pub async fn rotate(&self, record: &TokenRecord, new_token: &str) -> AppResult<Rotation> {
        let rotated = self
            .tokens
            .rotate(record.user_id, &record.refresh_token, new_token)
            .await?;
        Ok(match rotated {
            Some(record) => Rotation::Rotated(record),
            None => {
                debug!(user_id = %record.user_id, "Refresh token rotation superseded");
                Rotation::Superseded
            }
        })
    }

    /// Removes every record of `user_id`. A no-op when none exists.
    pub async fn revoke_all_for_user(&self, user_id: Uuid) -> AppResult<()> {
        let removed = self.tokens.delete_for_user(user_id).await?;
        debug!(user_id = %user_id, removed, "Revoked refresh tokens");
        Ok(())
    }
}
