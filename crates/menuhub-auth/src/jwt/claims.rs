//! JWT claims structure shared by access and refresh tokens.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims payload embedded in every token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// The user the token was minted for.
    pub id: Uuid,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp. Refresh tokens carry none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Random token id so two tokens minted in the same second differ.
    pub jti: Uuid,
    /// Token type: "access" or "refresh".
    pub token_type: TokenType,
}

/// Distinguishes access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Short-lived bearer token for API requests.
    Access,
    /// Cookie token whose validity is its presence in the token store.
    Refresh,
}

impl Claims {
    /// Returns the user ID.
    pub fn user_id(&self) -> Uuid {
        self.id
    }
}
