//! Token record entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The single active refresh token of a user.
///
/// A refresh token is valid only while it is the `refresh_token` of the
/// user's record. Rotation overwrites it; logout and user deletion remove
/// the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct TokenRecord {
    /// Record identifier.
    pub id: Uuid,
    /// Owning user (unique).
    pub user_id: Uuid,
    /// Currently valid refresh token.
    #[serde(skip_serializing)]
    pub refresh_token: String,
    /// Creation or last rotation time.
    pub created_at: DateTime<Utc>,
}
