//! First-run administrator configuration.

use serde::{Deserialize, Serialize};

/// Credentials for the account created when the user store is empty.
///
/// Nothing is created unless both `admin_email` and `admin_password` are set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Display name of the bootstrap account.
    #[serde(default)]
    pub admin_name: Option<String>,
    /// Login email of the bootstrap account.
    #[serde(default)]
    pub admin_email: Option<String>,
    /// Initial plaintext password; hashed before it is stored.
    #[serde(default)]
    pub admin_password: Option<String>,
}

impl BootstrapConfig {
    /// Returns `(name, email, password)` when bootstrap is configured.
    pub fn credentials(&self) -> Option<(String, &str, &str)> {
        let email = self.admin_email.as_deref().filter(|e| !e.trim().is_empty())?;
        let password = self.admin_password.as_deref().filter(|p| !p.is_empty())?;
        let name = self
            .admin_name
            .clone()
            .unwrap_or_else(|| "Administrator".to_string());
        Some((name, email, password))
    }
}
