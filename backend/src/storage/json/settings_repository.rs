use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use shared::RestaurantSettings;

use super::connection::JsonConnection;
use crate::storage::traits::SettingsStorage;
use crate::storage::SETTINGS_STORE_SLOT;

/// JSON-file repository for the restaurant settings singleton.
///
/// The slot holds exactly one object. Reading an empty slot materializes
/// the defaults and persists them, so the singleton always has a value.
#[derive(Clone)]
pub struct SettingsRepository {
    connection: JsonConnection,
}

impl SettingsRepository {
    /// Create a new JSON settings repository
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn load_or_create_settings(&self) -> Result<RestaurantSettings> {
        match self.connection.read_slot(SETTINGS_STORE_SLOT)? {
            Some(content) => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse slot {}", SETTINGS_STORE_SLOT)),
            None => {
                let settings = RestaurantSettings::default();
                self.save_settings(&settings)?;
                info!("Created default restaurant settings");
                Ok(settings)
            }
        }
    }

    fn save_settings(&self, settings: &RestaurantSettings) -> Result<()> {
        let content =
            serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;
        self.connection.write_slot(SETTINGS_STORE_SLOT, &content)
    }
}

#[async_trait]
impl SettingsStorage for SettingsRepository {
    async fn get_settings(&self) -> Result<RestaurantSettings> {
        self.load_or_create_settings()
    }

    async fn update_settings(&self, settings: &RestaurantSettings) -> Result<()> {
        self.save_settings(settings)
    }
}
