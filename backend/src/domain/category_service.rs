use anyhow::Result;
use chrono::Utc;
use log::{info, warn};
use std::sync::Arc;
use uuid::Uuid;

use crate::storage::CategoryStorage;
use shared::{
    BuffetCategory, CategoryListResponse, CategoryResponse, CreateCategoryRequest,
    UpdateCategoryRequest,
};

/// Service for managing buffet categories
#[derive(Clone)]
pub struct CategoryService {
    storage: Arc<dyn CategoryStorage>,
}

impl CategoryService {
    /// Create a new CategoryService
    pub fn new(storage: Arc<dyn CategoryStorage>) -> Self {
        Self { storage }
    }

    /// Create a new buffet category.
    ///
    /// The store performs no validation; callers run the form rules first.
    pub async fn create_category(&self, request: CreateCategoryRequest) -> Result<CategoryResponse> {
        info!("Creating category: {}", request.name);

        let now = Utc::now();
        let category = BuffetCategory {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            description: request.description,
            price_per_plate: request.price_per_plate,
            created_at: now,
            updated_at: now,
        };

        self.storage.store_category(&category).await?;

        info!("Created category {} with ID: {}", category.name, category.id);

        Ok(CategoryResponse {
            category,
            success_message: "Category created successfully".to_string(),
        })
    }

    /// Get a category by ID
    pub async fn get_category(&self, category_id: &str) -> Result<Option<BuffetCategory>> {
        self.storage.get_category(category_id).await
    }

    /// List all categories
    pub async fn list_categories(&self) -> Result<CategoryListResponse> {
        let categories = self.storage.list_categories().await?;
        Ok(CategoryListResponse { categories })
    }

    /// Merge the provided fields into an existing category and refresh its
    /// `updated_at` stamp.
    ///
    /// Returns `Ok(None)` when no category has the given id; the miss is a
    /// harmless no-op, not an error.
    pub async fn update_category(
        &self,
        category_id: &str,
        request: UpdateCategoryRequest,
    ) -> Result<Option<BuffetCategory>> {
        let mut category = match self.storage.get_category(category_id).await? {
            Some(category) => category,
            None => {
                warn!("Update requested for unknown category: {}", category_id);
                return Ok(None);
            }
        };

        if let Some(name) = request.name {
            category.name = name;
        }
        if let Some(description) = request.description {
            category.description = description;
        }
        if let Some(price_per_plate) = request.price_per_plate {
            category.price_per_plate = price_per_plate;
        }
        category.updated_at = Utc::now();

        self.storage.update_category(&category).await?;

        info!("Updated category {} with ID: {}", category.name, category.id);

        Ok(Some(category))
    }

    /// Delete a category by ID.
    ///
    /// Bookings referencing the category are left untouched; their
    /// reference dangles and readers degrade accordingly. Returns false
    /// when no category had the given id.
    pub async fn delete_category(&self, category_id: &str) -> Result<bool> {
        let deleted = self.storage.delete_category(category_id).await?;

        if deleted {
            info!("Deleted category with ID: {}", category_id);
        } else {
            warn!("Delete requested for unknown category: {}", category_id);
        }

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json::test_utils::TestEnvironment;
    use crate::storage::json::CategoryRepository;

    fn setup_test() -> (TestEnvironment, CategoryService) {
        let env = TestEnvironment::new().expect("Failed to create test environment");
        let service = CategoryService::new(Arc::new(CategoryRepository::new(env.connection.clone())));
        (env, service)
    }

    fn veg_buffet_request() -> CreateCategoryRequest {
        CreateCategoryRequest {
            name: "Veg Buffet".to_string(),
            description: "All vegetarian spread".to_string(),
            price_per_plate: 15.0,
        }
    }

    #[tokio::test]
    async fn test_create_category() {
        let (_env, service) = setup_test();

        let response = service
            .create_category(veg_buffet_request())
            .await
            .expect("Failed to create category");

        assert!(!response.category.id.is_empty());
        assert_eq!(response.category.name, "Veg Buffet");
        assert_eq!(response.category.price_per_plate, 15.0);
        assert_eq!(response.category.created_at, response.category.updated_at);
        assert_eq!(response.success_message, "Category created successfully");

        // Created record is immediately retrievable by the returned id
        let loaded = service
            .get_category(&response.category.id)
            .await
            .expect("Failed to get category");
        assert_eq!(loaded, Some(response.category));
    }

    #[tokio::test]
    async fn test_get_nonexistent_category() {
        let (_env, service) = setup_test();

        let category = service
            .get_category("nonexistent")
            .await
            .expect("Failed to query category");
        assert!(category.is_none());
    }

    #[tokio::test]
    async fn test_update_category_merges_partial_fields() {
        let (_env, service) = setup_test();

        let created = service
            .create_category(veg_buffet_request())
            .await
            .expect("Failed to create category")
            .category;

        let updated = service
            .update_category(
                &created.id,
                UpdateCategoryRequest {
                    price_per_plate: Some(18.5),
                    ..Default::default()
                },
            )
            .await
            .expect("Failed to update category")
            .expect("Category missing");

        // Only the requested field changed
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.price_per_plate, 18.5);
        // created_at never moves, updated_at does
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_unknown_category_is_a_noop() {
        let (_env, service) = setup_test();

        let result = service
            .update_category(
                "nonexistent",
                UpdateCategoryRequest {
                    name: Some("Ghost".to_string()),
                    ..Default::default()
                },
            )
            .await
            .expect("Update must not fail on unknown ids");
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_category() {
        let (_env, service) = setup_test();

        let created = service
            .create_category(veg_buffet_request())
            .await
            .expect("Failed to create category")
            .category;

        assert!(service
            .delete_category(&created.id)
            .await
            .expect("Failed to delete category"));
        assert!(service
            .get_category(&created.id)
            .await
            .expect("Failed to query category")
            .is_none());
    }

    #[tokio::test]
    async fn test_delete_unknown_category_leaves_collection_unchanged() {
        let (_env, service) = setup_test();

        service
            .create_category(veg_buffet_request())
            .await
            .expect("Failed to create category");

        assert!(!service
            .delete_category("nonexistent")
            .await
            .expect("Delete must not fail on unknown ids"));
        let listed = service.list_categories().await.expect("Failed to list categories");
        assert_eq!(listed.categories.len(), 1);
    }
}
