//! Refresh-token record repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use menuhub_core::error::{AppError, ErrorKind};
use menuhub_core::result::AppResult;
use menuhub_entity::token::TokenRecord;

use crate::traits::TokenRepository;

/// PostgreSQL-backed token record repository.
#[derive(Debug, Clone)]
pub struct PgTokenRepository {
    pool: PgPool,
}

impl PgTokenRepository {
    /// Create a new token repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenRepository for PgTokenRepository {
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<TokenRecord>> {
        sqlx::query_as::<_, TokenRecord>("SELECT * FROM tokens WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find token by user", e)
            })
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<TokenRecord>> {
        sqlx::query_as::<_, TokenRecord>("SELECT * FROM tokens WHERE refresh_token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find refresh token", e)
            })
    }

    async fn replace_for_user(&self, user_id: Uuid, token: &str) -> AppResult<TokenRecord> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("DELETE FROM tokens WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete previous token", e)
            })?;

        // A concurrent login for the same user may have inserted in between.
        let record = sqlx::query_as::<_, TokenRecord>(
            "INSERT INTO tokens (id, user_id, refresh_token, created_at) \
             VALUES ($1, $2, $3, NOW()) \
             ON CONFLICT (user_id) DO UPDATE SET \
             id = EXCLUDED.id, refresh_token = EXCLUDED.refresh_token, created_at = EXCLUDED.created_at \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(token)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to store token", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit token", e)
        })?;

        Ok(record)
    }

    async fn rotate(
        &self,
        user_id: Uuid,
        current: &str,
        next: &str,
    ) -> AppResult<Option<TokenRecord>> {
        sqlx::query_as::<_, TokenRecord>(
            "UPDATE tokens SET refresh_token = $3, created_at = NOW() \
             WHERE user_id = $1 AND refresh_token = $2 \
             RETURNING *",
        )
        .bind(user_id)
        .bind(current)
        .bind(next)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to rotate token", e))
    }

    async fn delete_for_user(&self, user_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM tokens WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to revoke tokens", e))?;
        Ok(result.rows_affected())
    }
}
