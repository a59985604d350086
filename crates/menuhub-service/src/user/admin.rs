//! Admin user management: create, update, delete, list, and first-run bootstrap.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;
use validator::ValidateEmail;

use menuhub_auth::password::{PasswordHasher, PasswordValidator};
use menuhub_auth::session::TokenStore;
use menuhub_core::config::BootstrapConfig;
use menuhub_core::error::AppError;
use menuhub_core::result::AppResult;
use menuhub_database::UserRepository;
use menuhub_entity::user::{
    ADMIN_PAGES, CreateUser, DEFAULT_PERMISSION, UpdateUser, User, UserRole, normalize_email,
};

use crate::context::RequestContext;

/// Handles administrative user management operations.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    users: Arc<dyn UserRepository>,
    tokens: TokenStore,
    hasher: PasswordHasher,
    validator: PasswordValidator,
}

/// Request to create a new user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    /// Display name (unique).
    pub name: Option<String>,
    /// Email (unique).
    pub email: Option<String>,
    /// Initial password.
    pub password: Option<String>,
    /// Permitted page paths; the dashboard when absent or empty.
    pub permissions: Option<Vec<String>>,
    /// Role; `user` when absent.
    pub role: Option<UserRole>,
}

/// Request to update a user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    /// New display name.
    pub name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New password; left unchanged when absent or empty.
    pub password: Option<String>,
    /// Replacement permissions; left unchanged when absent or empty.
    pub permissions: Option<Vec<String>>,
    /// New role.
    pub role: Option<UserRole>,
}

/// Trimmed, non-empty value of an optional field.
fn required(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(
        users: Arc<dyn UserRepository>,
        tokens: TokenStore,
        hasher: PasswordHasher,
        validator: PasswordValidator,
    ) -> Self {
        Self {
            users,
            tokens,
            hasher,
            validator,
        }
    }

    /// Lists all users, newest first.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.find_all().await
    }

    /// Returns the caller's own record.
    pub async fn current_user(&self, ctx: &RequestContext) -> AppResult<User> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Creates a verified user.
    pub async fn create_user(
        &self,
        ctx: &RequestContext,
        req: CreateUserRequest,
    ) -> AppResult<User> {
        let (Some(name), Some(email), Some(password)) = (
            required(req.name.as_deref()),
            required(req.email.as_deref()),
            req.password.as_deref().filter(|p| !p.is_empty()),
        ) else {
            return Err(AppError::validation("Name, email and password are required"));
        };

        let email = normalize_email(email);
        if !email.validate_email() {
            return Err(AppError::validation("Please enter a valid email"));
        }
        self.validator.validate(password)?;
        let password_hash = self.hasher.hash(password.to_string()).await?;

        let permissions = match req.permissions {
            Some(permissions) if !permissions.is_empty() => permissions,
            _ => vec![DEFAULT_PERMISSION.to_string()],
        };

        let user = self
            .users
            .create(&CreateUser {
                name: name.to_string(),
                email,
                password_hash,
                permissions,
                role: req.role.unwrap_or_default(),
                is_verified: true,
            })
            .await?;

        info!(
            admin_id = %ctx.user_id,
            new_user_id = %user.id,
            role = %user.role,
            "User created by admin"
        );
        Ok(user)
    }

    /// Updates another user's profile, permissions, role, or password.
    pub async fn update_user(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        req: UpdateUserRequest,
    ) -> AppResult<User> {
        if ctx.is_self(user_id) {
            return Err(AppError::forbidden("You cannot modify your own account"));
        }

        let (Some(name), Some(email)) = (
            required(req.name.as_deref()),
            required(req.email.as_deref()),
        ) else {
            return Err(AppError::validation("Name and email are required"));
        };

        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(AppError::not_found("User not found"));
        }

        let email = normalize_email(email);
        if !email.validate_email() {
            return Err(AppError::validation("Please enter a valid email"));
        }

        let password_hash = match req.password.filter(|p| !p.is_empty()) {
            Some(password) => {
                self.validator.validate(&password)?;
                Some(self.hasher.hash(password).await?)
            }
            None => None,
        };

        let updated = self
            .users
            .update(&UpdateUser {
                id: user_id,
                name: name.to_string(),
                email,
                password_hash,
                permissions: req.permissions.filter(|p| !p.is_empty()),
                role: req.role,
            })
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(admin_id = %ctx.user_id, user_id = %user_id, "User updated by admin");
        Ok(updated)
    }

    /// Deletes another user and revokes their refresh token.
    pub async fn delete_user(&self, ctx: &RequestContext, user_id: Uuid) -> AppResult<()> {
        if ctx.is_self(user_id) {
            return Err(AppError::forbidden("You cannot delete your own account"));
        }

        self.tokens.revoke_all_for_user(user_id).await?;
        if !self.users.delete(user_id).await? {
            return Err(AppError::not_found("User not found"));
        }

        info!(admin_id = %ctx.user_id, user_id = %user_id, "User deleted by admin");
        Ok(())
    }

    /// Creates the configured super administrator when no user exists yet.
    pub async fn bootstrap(&self, config: &BootstrapConfig) -> AppResult<Option<User>> {
        let Some((name, email, password)) = config.credentials() else {
            return Ok(None);
        };
        if self.users.count().await? > 0 {
            return Ok(None);
        }

        self.validator.validate(password)?;
        let password_hash = self.hasher.hash(password.to_string()).await?;
        let user = self
            .users
            .create(&CreateUser {
                name,
                email: normalize_email(email),
                password_hash,
                permissions: ADMIN_PAGES.iter().map(|p| p.to_string()).collect(),
                role: UserRole::SuperAdmin,
                is_verified: true,
            })
            .await?;

        info!(user_id = %user.id, email = %user.email, "Bootstrap administrator created");
        Ok(Some(user))
    }
}
