use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::storage::SettingsStorage;
use shared::{RestaurantSettings, UpdateSettingsRequest};

/// Service for the restaurant settings singleton.
///
/// There is always exactly one settings record: the storage layer
/// materializes the defaults on first read, updates merge in place, and
/// nothing deletes it.
#[derive(Clone)]
pub struct SettingsService {
    storage: Arc<dyn SettingsStorage>,
}

impl SettingsService {
    /// Create a new SettingsService
    pub fn new(storage: Arc<dyn SettingsStorage>) -> Self {
        Self { storage }
    }

    /// Get the current settings
    pub async fn get_settings(&self) -> Result<RestaurantSettings> {
        self.storage.get_settings().await
    }

    /// Merge the provided fields into the settings singleton
    pub async fn update_settings(&self, request: UpdateSettingsRequest) -> Result<RestaurantSettings> {
        let mut settings = self.storage.get_settings().await?;

        if let Some(name) = request.name {
            settings.name = name;
        }
        if let Some(contact_info) = request.contact_info {
            settings.contact_info = contact_info;
        }
        if let Some(logo) = request.logo {
            settings.logo = Some(logo);
        }
        if let Some(theme) = request.theme {
            settings.theme = theme;
        }

        self.storage.update_settings(&settings).await?;

        info!("Updated restaurant settings for {}", settings.name);

        Ok(settings)
    }
}
