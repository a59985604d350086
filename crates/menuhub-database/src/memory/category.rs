//! In-memory category repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use menuhub_core::result::AppResult;
use menuhub_entity::category::{Category, CreateCategory, UpdateCategory};

use super::Tables;
use crate::traits::CategoryRepository;

/// Category repository backed by a locked map.
#[derive(Debug, Clone)]
pub struct MemoryCategoryRepository {
    tables: Arc<Tables>,
}

impl MemoryCategoryRepository {
    pub(crate) fn new(tables: Arc<Tables>) -> Self {
        Self { tables }
    }
}

#[async_trait]
impl CategoryRepository for MemoryCategoryRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>> {
        Ok(self.tables.categories.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Category>> {
        let mut categories: Vec<Category> = self
            .tables
            .categories
            .read()
            .await
            .values()
            .cloned()
            .collect();
        categories.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(categories)
    }

    async fn create(&self, data: &CreateCategory) -> AppResult<Category> {
        let now = Utc::now();
        let category = Category {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            description: data.description.clone(),
            item_count: 0,
            created_at: now,
            updated_at: now,
        };
        self.tables
            .categories
            .write()
            .await
            .insert(category.id, category.clone());
        Ok(category)
    }

    async fn update(&self, id: Uuid, data: &UpdateCategory) -> AppResult<Option<Category>> {
        let mut categories = self.tables.categories.write().await;
        let Some(category) = categories.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = &data.name {
            category.name = name.clone();
        }
        if let Some(description) = &data.description {
            category.description = description.clone();
        }
        category.updated_at = Utc::now();
        Ok(Some(category.clone()))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.tables.categories.write().await.remove(&id).is_some())
    }

    async fn adjust_item_count(&self, id: Uuid, delta: i32) -> AppResult<()> {
        if let Some(category) = self.tables.categories.write().await.get_mut(&id) {
            category.item_count = (category.item_count + delta).max(0);
            category.updated_at = Utc::now();
        }
        Ok(())
    }
}
