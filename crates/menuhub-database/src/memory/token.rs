//! In-memory token record repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use menuhub_core::result::AppResult;
use menuhub_entity::token::TokenRecord;

use super::Tables;
use crate::traits::TokenRepository;

/// Token repository keyed by user id.
///
/// Rotation compares and swaps while holding the map's entry lock.
#[derive(Debug, Clone)]
pub struct MemoryTokenRepository {
    tables: Arc<Tables>,
}

impl MemoryTokenRepository {
    pub(crate) fn new(tables: Arc<Tables>) -> Self {
        Self { tables }
    }
}

#[async_trait]
impl TokenRepository for MemoryTokenRepository {
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<TokenRecord>> {
        Ok(self.tables.tokens.get(&user_id).map(|r| r.value().clone()))
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<TokenRecord>> {
        Ok(self
            .tables
            .tokens
            .iter()
            .find(|r| r.refresh_token == token)
            .map(|r| r.value().clone()))
    }

    async fn replace_for_user(&self, user_id: Uuid, token: &str) -> AppResult<TokenRecord> {
        let record = TokenRecord {
            id: Uuid::new_v4(),
            user_id,
            refresh_token: token.to_string(),
            created_at: Utc::now(),
        };
        self.tables.tokens.insert(user_id, record.clone());
        Ok(record)
    }

    async fn rotate(
        &self,
        user_id: Uuid,
        current: &str,
        next: &str,
    ) -> AppResult<Option<TokenRecord>> {
        let Some(mut record) = self.tables.tokens.get_mut(&user_id) else {
            return Ok(None);
        };
        if record.refresh_token != current {
            return Ok(None);
        }
        record.refresh_token = next.to_string();
        record.created_at = Utc::now();
        Ok(Some(record.clone()))
    }

    async fn delete_for_user(&self, user_id: Uuid) -> AppResult<u64> {
        Ok(u64::from(self.tables.tokens.remove(&user_id).is_some()))
    }
}
