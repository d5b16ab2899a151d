use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;
use uuid::Uuid;

use crate::storage::OrganizationStorage;
use shared::{
    CreateOrganizationRequest, Organization, OrganizationListResponse, OrganizationResponse,
    UpdateOrganizationRequest,
};

/// Service for managing partner organizations
#[derive(Clone)]
pub struct OrganizationService {
    storage: Arc<dyn OrganizationStorage>,
}

impl OrganizationService {
    /// Create a new OrganizationService
    pub fn new(storage: Arc<dyn OrganizationStorage>) -> Self {
        Self { storage }
    }

    /// Create a new organization
    pub async fn create_organization(
        &self,
        request: CreateOrganizationRequest,
    ) -> Result<OrganizationResponse> {
        info!("Creating organization: {}", request.name);

        let organization = Organization {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            email: request.email,
            phone: request.phone,
        };

        self.storage.store_organization(&organization).await?;

        info!(
            "Created organization {} with ID: {}",
            organization.name, organization.id
        );

        Ok(OrganizationResponse {
            organization,
            success_message: "Organization created successfully".to_string(),
        })
    }

    /// Get an organization by ID
    pub async fn get_organization(&self, organization_id: &str) -> Result<Option<Organization>> {
        self.storage.get_organization(organization_id).await
    }

    /// List all organizations
    pub async fn list_organizations(&self) -> Result<OrganizationListResponse> {
        let organizations = self.storage.list_organizations().await?;
        Ok(OrganizationListResponse { organizations })
    }

    /// Merge the provided fields into an existing organization.
    ///
    /// Returns `Ok(None)` when no organization has the given id.
    pub async fn update_organization(
        &self,
        organization_id: &str,
        request: UpdateOrganizationRequest,
    ) -> Result<Option<Organization>> {
        let mut organization = match self.storage.get_organization(organization_id).await? {
            Some(organization) => organization,
            None => {
                warn!("Update requested for unknown organization: {}", organization_id);
                return Ok(None);
            }
        };

        if let Some(name) = request.name {
            organization.name = name;
        }
        if let Some(email) = request.email {
            organization.email = email;
        }
        if let Some(phone) = request.phone {
            organization.phone = phone;
        }

        self.storage.update_organization(&organization).await?;

        info!(
            "Updated organization {} with ID: {}",
            organization.name, organization.id
        );

        Ok(Some(organization))
    }

    /// Delete an organization by ID. Returns false when no organization
    /// had the given id.
    pub async fn delete_organization(&self, organization_id: &str) -> Result<bool> {
        let deleted = self.storage.delete_organization(organization_id).await?;

        if deleted {
            info!("Deleted organization with ID: {}", organization_id);
        } else {
            warn!("Delete requested for unknown organization: {}", organization_id);
        }

        Ok(deleted)
    }
}
