//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// Page path granted to every user that has no explicit permissions.
pub const DEFAULT_PERMISSION: &str = "/admin/dashboard";

/// Every admin page path a permission list may contain.
pub const ADMIN_PAGES: &[&str] = &[
    "/admin/dashboard",
    "/admin/categories",
    "/admin/menu-items",
    "/admin/orders",
    "/admin/users",
];

/// A back-office account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique display name.
    pub name: String,
    /// Unique, lower-cased email address.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Page paths this user may open, in insertion order.
    pub permissions: Vec<String>,
    /// Whether the account was verified by an administrator.
    pub is_verified: bool,
    /// Account role.
    pub role: UserRole,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// The permission list, falling back to the dashboard when empty.
    pub fn effective_permissions(&self) -> Vec<String> {
        if self.permissions.is_empty() {
            vec![DEFAULT_PERMISSION.to_string()]
        } else {
            self.permissions.clone()
        }
    }

    /// Whether `path` is one of this user's effective permitted paths.
    pub fn is_permitted(&self, path: &str) -> bool {
        if self.permissions.is_empty() {
            return path == DEFAULT_PERMISSION;
        }
        self.permissions.iter().any(|p| p == path)
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name, already trimmed.
    pub name: String,
    /// Email address, already normalized.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Permitted page paths.
    pub permissions: Vec<String>,
    /// Assigned role.
    pub role: UserRole,
    /// Verification flag.
    pub is_verified: bool,
}

/// Data for updating an existing user.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    /// The user ID to update.
    pub id: Uuid,
    /// New display name.
    pub name: String,
    /// New normalized email.
    pub email: String,
    /// New password hash.
    pub password_hash: Option<String>,
    /// Replacement permission list.
    pub permissions: Option<Vec<String>>,
    /// New role.
    pub role: Option<UserRole>,
}

/// Trim and lower-case an email address for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
