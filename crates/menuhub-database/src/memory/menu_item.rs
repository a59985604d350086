//! In-memory menu item repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use menuhub_core::result::AppResult;
use menuhub_entity::category::CategorySummary;
use menuhub_entity::menu_item::{CreateMenuItem, MenuItem, MenuItemView, UpdateMenuItem};

use super::Tables;
use crate::traits::MenuItemRepository;

/// Menu item repository backed by a locked map.
#[derive(Debug, Clone)]
pub struct MemoryMenuItemRepository {
    tables: Arc<Tables>,
}

impl MemoryMenuItemRepository {
    pub(crate) fn new(tables: Arc<Tables>) -> Self {
        Self { tables }
    }
}

#[async_trait]
impl MenuItemRepository for MemoryMenuItemRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<MenuItem>> {
        Ok(self.tables.menu_items.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<MenuItemView>> {
        let categories = self.tables.categories.read().await;
        let mut views: Vec<MenuItemView> = self
            .tables
            .menu_items
            .read()
            .await
            .values()
            .map(|item| MenuItemView {
                category: categories.get(&item.category_id).map(|c| CategorySummary {
                    id: c.id,
                    name: c.name.clone(),
                }),
                item: item.clone(),
            })
            .collect();
        views.sort_by(|a, b| b.item.created_at.cmp(&a.item.created_at));
        Ok(views)
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.tables.menu_items.read().await.len() as i64)
    }

    async fn create(&self, data: &CreateMenuItem) -> AppResult<MenuItem> {
        let now = Utc::now();
        let item = MenuItem {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            description: data.description.clone(),
            price: data.price,
            category_id: data.category_id,
            image_url: data.image_url.clone(),
            created_at: now,
            updated_at: now,
        };
        self.tables
            .menu_items
            .write()
            .await
            .insert(item.id, item.clone());
        Ok(item)
    }

    async fn update(&self, id: Uuid, data: &UpdateMenuItem) -> AppResult<Option<MenuItem>> {
        let mut items = self.tables.menu_items.write().await;
        let Some(item) = items.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = &data.name {
            item.name = name.clone();
        }
        if let Some(description) = &data.description {
            item.description = description.clone();
        }
        if let Some(price) = data.price {
            item.price = price;
        }
        if let Some(category_id) = data.category_id {
            item.category_id = category_id;
        }
        if let Some(image_url) = &data.image_url {
            item.image_url = image_url.clone();
        }
        item.updated_at = Utc::now();
        Ok(Some(item.clone()))
    }

    async fn delete(&self, id: Uuid) -> AppResult<Option<MenuItem>> {
        Ok(self.tables.menu_items.write().await.remove(&id))
    }
}
