//! Request DTOs.
//!
//! User and catalog bodies deserialize straight into the service request
//! types; only the bodies without a service counterpart live here.

use serde::Deserialize;

/// Login request body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    /// Account email.
    #[serde(default)]
    pub email: Option<String>,
    /// Account password.
    #[serde(default)]
    pub password: Option<String>,
}

/// Order status change body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusUpdateRequest {
    /// New status wire name.
    #[serde(default)]
    pub status: Option<String>,
}
