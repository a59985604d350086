//! In-memory user repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use menuhub_core::error::AppError;
use menuhub_core::result::AppResult;
use menuhub_entity::user::{CreateUser, UpdateUser, User, UserRole};

use super::Tables;
use crate::traits::UserRepository;

/// User repository backed by a locked map.
#[derive(Debug, Clone)]
pub struct MemoryUserRepository {
    tables: Arc<Tables>,
}

impl MemoryUserRepository {
    pub(crate) fn new(tables: Arc<Tables>) -> Self {
        Self { tables }
    }
}

/// Reject `name`/`email` already held by a user other than `except`.
fn check_unique<'a>(
    users: impl Iterator<Item = &'a User>,
    name: &str,
    email: &str,
    except: Option<Uuid>,
) -> AppResult<()> {
    for user in users.filter(|u| Some(u.id) != except) {
        if user.name == name {
            return Err(AppError::conflict("name"));
        }
        if user.email.eq_ignore_ascii_case(email) {
            return Err(AppError::conflict("email"));
        }
    }
    Ok(())
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.tables.users.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.tables.users.read().await;
        Ok(users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self.tables.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.tables.users.read().await.len() as i64)
    }

    async fn count_by_role(&self, role: UserRole) -> AppResult<i64> {
        let users = self.tables.users.read().await;
        Ok(users.values().filter(|u| u.role == role).count() as i64)
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut users = self.tables.users.write().await;
        check_unique(users.values(), &data.name, &data.email, None)?;

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            permissions: data.permissions.clone(),
            is_verified: data.is_verified,
            role: data.role,
            created_at: now,
            updated_at: now,
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, data: &UpdateUser) -> AppResult<Option<User>> {
        let mut users = self.tables.users.write().await;
        if !users.contains_key(&data.id) {
            return Ok(None);
        }
        check_unique(users.values(), &data.name, &data.email, Some(data.id))?;

        let Some(user) = users.get_mut(&data.id) else {
            return Ok(None);
        };
        user.name = data.name.clone();
        user.email = data.email.clone();
        if let Some(hash) = &data.password_hash {
            user.password_hash = hash.clone();
        }
        if let Some(permissions) = &data.permissions {
            user.permissions = permissions.clone();
        }
        if let Some(role) = data.role {
            user.role = role;
        }
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let removed = self.tables.users.write().await.remove(&id).is_some();
        if removed {
            self.tables.tokens.remove(&id);
        }
        Ok(removed)
    }
}
