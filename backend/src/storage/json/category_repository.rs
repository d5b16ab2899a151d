use anyhow::{Context, Result};
use async_trait::async_trait;
use shared::BuffetCategory;

use super::connection::JsonConnection;
use crate::storage::traits::CategoryStorage;
use crate::storage::CATEGORY_STORE_SLOT;

/// JSON-file category repository. Every mutation rewrites the whole
/// collection document.
#[derive(Clone)]
pub struct CategoryRepository {
    connection: JsonConnection,
}

impl CategoryRepository {
    /// Create a new JSON category repository
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn load_categories(&self) -> Result<Vec<BuffetCategory>> {
        match self.connection.read_slot(CATEGORY_STORE_SLOT)? {
            Some(content) => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse slot {}", CATEGORY_STORE_SLOT)),
            None => Ok(Vec::new()),
        }
    }

    fn save_categories(&self, categories: &[BuffetCategory]) -> Result<()> {
        let content = serde_json::to_string_pretty(categories)
            .context("Failed to serialize categories")?;
        self.connection.write_slot(CATEGORY_STORE_SLOT, &content)
    }
}

#[async_trait]
impl CategoryStorage for CategoryRepository {
    async fn store_category(&self, category: &BuffetCategory) -> Result<()> {
        let mut categories = self.load_categories()?;
        categories.push(category.clone());
        self.save_categories(&categories)
    }

    async fn get_category(&self, category_id: &str) -> Result<Option<BuffetCategory>> {
        let categories = self.load_categories()?;
        Ok(categories.into_iter().find(|c| c.id == category_id))
    }

    async fn list_categories(&self) -> Result<Vec<BuffetCategory>> {
        self.load_categories()
    }

    async fn update_category(&self, category: &BuffetCategory) -> Result<bool> {
        let mut categories = self.load_categories()?;
        match categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => *existing = category.clone(),
            None => return Ok(false),
        }
        self.save_categories(&categories)?;
        Ok(true)
    }

    async fn delete_category(&self, category_id: &str) -> Result<bool> {
        let mut categories = self.load_categories()?;
        let original_len = categories.len();
        categories.retain(|c| c.id != category_id);

        if categories.len() == original_len {
            return Ok(false);
        }
        self.save_categories(&categories)?;
        Ok(true)
    }
}
