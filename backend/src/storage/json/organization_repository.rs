use anyhow::{Context, Result};
use async_trait::async_trait;
use shared::Organization;

use super::connection::JsonConnection;
use crate::storage::traits::OrganizationStorage;
use crate::storage::ORGANIZATION_STORE_SLOT;

/// JSON-file organization repository. Every mutation rewrites the whole
/// collection document.
#[derive(Clone)]
pub struct OrganizationRepository {
    connection: JsonConnection,
}

impl OrganizationRepository {
    /// Create a new JSON organization repository
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn load_organizations(&self) -> Result<Vec<Organization>> {
        match self.connection.read_slot(ORGANIZATION_STORE_SLOT)? {
            Some(content) => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse slot {}", ORGANIZATION_STORE_SLOT)),
            None => Ok(Vec::new()),
        }
    }

    fn save_organizations(&self, organizations: &[Organization]) -> Result<()> {
        let content = serde_json::to_string_pretty(organizations)
            .context("Failed to serialize organizations")?;
        self.connection.write_slot(ORGANIZATION_STORE_SLOT, &content)
    }
}

#[async_trait]
impl OrganizationStorage for OrganizationRepository {
    async fn store_organization(&self, organization: &Organization) -> Result<()> {
        let mut organizations = self.load_organizations()?;
        organizations.push(organization.clone());
        self.save_organizations(&organizations)
    }

    async fn get_organization(&self, organization_id: &str) -> Result<Option<Organization>> {
        let organizations = self.load_organizations()?;
        Ok(organizations.into_iter().find(|o| o.id == organization_id))
    }

    async fn list_organizations(&self) -> Result<Vec<Organization>> {
        self.load_organizations()
    }

    async fn update_organization(&self, organization: &Organization) -> Result<bool> {
        let mut organizations = self.load_organizations()?;
        match organizations.iter_mut().find(|o| o.id == organization.id) {
            Some(existing) => *existing = organization.clone(),
            None => return Ok(false),
        }
        self.save_organizations(&organizations)?;
        Ok(true)
    }

    async fn delete_organization(&self, organization_id: &str) -> Result<bool> {
        let mut organizations = self.load_organizations()?;
        let original_len = organizations.len();
        organizations.retain(|o| o.id != organization_id);

        if organizations.len() == original_len {
            return Ok(false);
        }
        self.save_organizations(&organizations)?;
        Ok(true)
    }
}
