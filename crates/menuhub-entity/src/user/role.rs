//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account roles.
///
/// Roles are informational; page access is decided by the permission list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum UserRole {
    /// Storefront customer.
    #[default]
    User,
    /// Back-office administrator.
    Admin,
    /// Administrator created at bootstrap.
    SuperAdmin,
}

impl UserRole {
    /// Return the role as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::SuperAdmin => "superAdmin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = menuhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            "superAdmin" => Ok(Self::SuperAdmin),
            _ => Err(menuhub_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: user, admin, superAdmin"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!(
            "superAdmin".parse::<UserRole>().unwrap(),
            UserRole::SuperAdmin
        );
        assert!("root".parse::<UserRole>().is_err());
    }
}
