//! Token value types.

use serde::{Deserialize, Serialize};

/// A freshly minted access/refresh token pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived bearer token (raw JWT).
    pub access_token: String,
    /// Long-lived token stored in the token store and the `refreshToken` cookie.
    pub refresh_token: String,
}
