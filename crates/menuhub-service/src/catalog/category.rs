//! Category management.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use menuhub_core::error::AppError;
use menuhub_core::result::AppResult;
use menuhub_database::CategoryRepository;
use menuhub_entity::category::{Category, CreateCategory, UpdateCategory};

/// Category fields as submitted; every field is optional so one type serves
/// create and partial update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryRequest {
    /// Category name.
    pub name: Option<String>,
    /// Category description.
    pub description: Option<String>,
}

/// Category CRUD.
#[derive(Debug, Clone)]
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    /// Creates a new category service.
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    /// All categories, newest first.
    pub async fn list(&self) -> AppResult<Vec<Category>> {
        self.categories.find_all().await
    }

    /// One category.
    pub async fn get(&self, id: Uuid) -> AppResult<Category> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found"))
    }

    /// Creates a category with no items.
    pub async fn create(&self, req: CategoryRequest) -> AppResult<Category> {
        let name = trimmed(req.name, "Category name is required")?
            .ok_or_else(|| AppError::validation("Category name is required"))?;
        let description = trimmed(req.description, "Category description is required")?
            .ok_or_else(|| AppError::validation("Category description is required"))?;

        let category = self
            .categories
            .create(&CreateCategory { name, description })
            .await?;
        info!(category_id = %category.id, "Category created");
        Ok(category)
    }

    /// Applies the fields present in `req`.
    pub async fn update(&self, id: Uuid, req: CategoryRequest) -> AppResult<Category> {
        let update = UpdateCategory {
            name: trimmed(req.name, "Category name is required")?,
            description: trimmed(req.description, "Category description is required")?,
        };
        self.categories
            .update(id, &update)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found"))
    }

    /// Deletes a category that has no menu items.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let category = self.get(id).await?;
        if category.item_count > 0 {
            return Err(AppError::validation(
                "Cannot delete category with existing items",
            ));
        }
        self.categories.delete(id).await?;
        info!(category_id = %id, "Category deleted");
        Ok(())
    }
}

/// Trims a present value, rejecting one that is blank.
fn trimmed(value: Option<String>, message: &str) -> AppResult<Option<String>> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if v.is_empty() => Err(AppError::validation(message)),
        other => Ok(other),
    }
}
