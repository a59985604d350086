//! Menu item management with category item-count upkeep.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use menuhub_core::error::AppError;
use menuhub_core::result::AppResult;
use menuhub_database::{CategoryRepository, MenuItemRepository};
use menuhub_entity::menu_item::{
    CreateMenuItem, MENU_ITEM_NAME_MAX, MenuItem, MenuItemView, UpdateMenuItem,
};

/// Menu item fields as submitted, shared by create and partial update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemRequest {
    /// Item name.
    pub name: Option<String>,
    /// Item description.
    pub description: Option<String>,
    /// Unit price.
    pub price: Option<f64>,
    /// Owning category, parsed during validation.
    #[serde(alias = "category")]
    pub category_id: Option<String>,
    /// Image URL.
    #[serde(alias = "image")]
    pub image_url: Option<String>,
}

/// Menu item CRUD.
#[derive(Debug, Clone)]
pub struct MenuItemService {
    items: Arc<dyn MenuItemRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl MenuItemService {
    /// Creates a new menu item service.
    pub fn new(
        items: Arc<dyn MenuItemRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self { items, categories }
    }

    /// All items with their category, newest first.
    pub async fn list(&self) -> AppResult<Vec<MenuItemView>> {
        self.items.find_all().await
    }

    /// Creates an item and counts it against its category.
    pub async fn create(&self, req: MenuItemRequest) -> AppResult<MenuItem> {
        let (Some(name), Some(description), Some(price), Some(category_id), Some(image_url)) = (
            req.name,
            req.description,
            req.price,
            req.category_id,
            req.image_url.filter(|u| !u.trim().is_empty()),
        ) else {
            return Err(AppError::validation("All fields are required"));
        };

        let category_id = self.require_category(&category_id).await?;

        let name = name.trim();
        if name.is_empty() || name.chars().count() > MENU_ITEM_NAME_MAX {
            return Err(AppError::validation("Invalid name"));
        }
        let description = description.trim();
        if description.is_empty() {
            return Err(AppError::validation("Description must not be empty"));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(AppError::validation("Invalid price"));
        }

        let item = self
            .items
            .create(&CreateMenuItem {
                name: name.to_string(),
                description: description.to_string(),
                price,
                category_id,
                image_url: image_url.trim().to_string(),
            })
            .await?;
        self.categories.adjust_item_count(category_id, 1).await?;

        info!(menu_item_id = %item.id, category_id = %category_id, "Menu item created");
        Ok(item)
    }

    /// Applies the fields present in `req`; a category change moves the count.
    pub async fn update(&self, id: Uuid, req: MenuItemRequest) -> AppResult<MenuItem> {
        let existing = self
            .items
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Menu item not found"))?;

        let category_id = match req.category_id.as_deref() {
            Some(raw) => Some(self.require_category(raw).await?),
            None => None,
        };

        let name = match req.name.as_deref().map(str::trim) {
            Some("") => {
                return Err(AppError::validation("Name must not be empty if provided"));
            }
            Some(n) if n.chars().count() > MENU_ITEM_NAME_MAX => {
                return Err(AppError::validation("Name cannot exceed 50 characters"));
            }
            other => other.map(str::to_string),
        };
        let description = match req.description.as_deref().map(str::trim) {
            Some("") => {
                return Err(AppError::validation(
                    "Description must not be empty if provided",
                ));
            }
            other => other.map(str::to_string),
        };
        if let Some(price) = req.price {
            if !price.is_finite() {
                return Err(AppError::validation(
                    "Price must be a valid number if provided",
                ));
            }
            if price < 0.0 {
                return Err(AppError::validation("Price cannot be negative"));
            }
        }

        let updated = self
            .items
            .update(
                id,
                &UpdateMenuItem {
                    name,
                    description,
                    price: req.price,
                    category_id,
                    image_url: req
                        .image_url
                        .map(|u| u.trim().to_string())
                        .filter(|u| !u.is_empty()),
                },
            )
            .await?
            .ok_or_else(|| AppError::not_found("Menu item not found"))?;

        if updated.category_id != existing.category_id {
            self.categories
                .adjust_item_count(existing.category_id, -1)
                .await?;
            self.categories
                .adjust_item_count(updated.category_id, 1)
                .await?;
        }
        Ok(updated)
    }

    /// Deletes an item and releases its slot in the category count.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let item = self
            .items
            .delete(id)
            .await?
            .ok_or_else(|| AppError::not_found("Menu item not found"))?;
        self.categories
            .adjust_item_count(item.category_id, -1)
            .await?;
        info!(menu_item_id = %id, "Menu item deleted");
        Ok(())
    }

    async fn require_category(&self, raw: &str) -> AppResult<Uuid> {
        let invalid = || AppError::validation("Invalid category ID");
        let id = Uuid::parse_str(raw.trim()).map_err(|_| invalid())?;
        match self.categories.find_by_id(id).await? {
            Some(_) => Ok(id),
            None => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menuhub_database::memory::MemoryDatabase;
    use menuhub_entity::category::CreateCategory;

    struct Fixture {
        service: MenuItemService,
        categories: Arc<dyn CategoryRepository>,
    }

    fn fixture() -> Fixture {
        let db = MemoryDatabase::new();
        let categories: Arc<dyn CategoryRepository> = Arc::new(db.categories());
        Fixture {
            service: MenuItemService::new(Arc::new(db.menu_items()), Arc::clone(&categories)),
            categories,
        }
    }

    async fn category(f: &Fixture, name: &str) -> Uuid {
        f.categories
            .create(&CreateCategory {
                name: name.to_string(),
                description: "desc".to_string(),
            })
            .await
            .unwrap()
            .id
    }

    async fn item_count(f: &Fixture, id: Uuid) -> i32 {
        f.categories.find_by_id(id).await.unwrap().unwrap().item_count
    }

    fn request(category_id: Uuid) -> MenuItemRequest {
        MenuItemRequest {
            name: Some(" Falafel ".to_string()),
            description: Some("Chickpea fritters".to_string()),
            price: Some(6.5),
            category_id: Some(category_id.to_string()),
            image_url: Some("https://img.example.com/falafel.jpg".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_and_delete_keep_count_in_step() {
        let f = fixture();
        let cat = category(&f, "Starters").await;

        let item = f.service.create(request(cat)).await.unwrap();
        assert_eq!(item.name, "Falafel");
        assert_eq!(item_count(&f, cat).await, 1);

        f.service.delete(item.id).await.unwrap();
        assert_eq!(item_count(&f, cat).await, 0);
    }

    #[tokio::test]
    async fn test_create_validation() {
        let f = fixture();
        let cat = category(&f, "Starters").await;

        let err = f
            .service
            .create(MenuItemRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.message, "All fields are required");

        let err = f.service.create(request(Uuid::new_v4())).await.unwrap_err();
        assert_eq!(err.message, "Invalid category ID");

        let mut malformed = request(cat);
        malformed.category_id = Some("not-a-uuid".to_string());
        let err = f.service.create(malformed).await.unwrap_err();
        assert_eq!(err.message, "Invalid category ID");

        let mut long_name = request(cat);
        long_name.name = Some("x".repeat(51));
        let err = f.service.create(long_name).await.unwrap_err();
        assert_eq!(err.message, "Invalid name");

        let mut negative = request(cat);
        negative.price = Some(-1.0);
        let err = f.service.create(negative).await.unwrap_err();
        assert_eq!(err.message, "Invalid price");

        assert_eq!(item_count(&f, cat).await, 0);
    }

    #[tokio::test]
    async fn test_category_change_moves_count() {
        let f = fixture();
        let from = category(&f, "Starters").await;
        let to = category(&f, "Mains").await;
        let item = f.service.create(request(from)).await.unwrap();

        let updated = f
            .service
            .update(
                item.id,
                MenuItemRequest {
                    category_id: Some(to.to_string()),
                    price: Some(7.0),
                    ..MenuItemRequest::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.category_id, to);
        assert_eq!(updated.name, "Falafel");
        assert_eq!(item_count(&f, from).await, 0);
        assert_eq!(item_count(&f, to).await, 1);
    }

    #[tokio::test]
    async fn test_update_rejects_blank_name() {
        let f = fixture();
        let cat = category(&f, "Starters").await;
        let item = f.service.create(request(cat)).await.unwrap();

        let err = f
            .service
            .update(
                item.id,
                MenuItemRequest {
                    name: Some("  ".to_string()),
                    ..MenuItemRequest::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.message, "Name must not be empty if provided");

        let err = f
            .service
            .update(
                item.id,
                MenuItemRequest {
                    category_id: Some("42".to_string()),
                    ..MenuItemRequest::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.message, "Invalid category ID");
        assert_eq!(item_count(&f, cat).await, 1);
    }
}
