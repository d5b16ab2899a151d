use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::{migrate::MigrateDatabase, Row, Sqlite, SqlitePool};
use std::sync::Arc;

use crate::storage::traits::{
    BookingStorage, CategoryStorage, OrganizationStorage, SettingsStorage,
};
use crate::storage::{
    BOOKING_STORE_SLOT, CATEGORY_STORE_SLOT, ORGANIZATION_STORE_SLOT, SETTINGS_STORE_SLOT,
};
use shared::{Booking, BuffetCategory, Organization, RestaurantSettings};

// The database URL for the production database
const DATABASE_URL: &str = "sqlite:buffet-tracker.db";

/// DbConnection keeps every store slot in one SQLite key-value table
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        // Connect to the database
        let pool = SqlitePool::connect(url).await?;

        // Setup database schema
        Self::setup_schema(&pool).await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Initialize the standard database
    pub async fn init() -> Result<Self> {
        Self::new(DATABASE_URL).await
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        // Generate a unique database name for tests
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        // One row per store slot, holding the slot's full JSON document
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS store_slots (
                name TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Read a slot's raw JSON document, or `None` when nothing has been
    /// persisted yet
    async fn read_slot(&self, slot: &str) -> Result<Option<String>> {
        let row = sqlx::query(
            r#"
            SELECT value FROM store_slots WHERE name = ?
            "#,
        )
        .bind(slot)
        .fetch_optional(&*self.pool)
        .await?;

        Ok(row.map(|r| r.get("value")))
    }

    /// Replace a slot's JSON document
    async fn write_slot(&self, slot: &str, value: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO store_slots (name, value)
            VALUES (?, ?)
            ON CONFLICT(name) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(slot)
        .bind(value)
        .execute(&*self.pool)
        .await?;
        Ok(())
    }

    async fn load_collection<T: DeserializeOwned>(&self, slot: &str) -> Result<Vec<T>> {
        match self.read_slot(slot).await? {
            Some(content) => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse slot {}", slot)),
            None => Ok(Vec::new()),
        }
    }

    async fn save_collection<T: Serialize>(&self, slot: &str, records: &[T]) -> Result<()> {
        let content = serde_json::to_string(records)
            .with_context(|| format!("Failed to serialize slot {}", slot))?;
        self.write_slot(slot, &content).await
    }
}

#[async_trait]
impl CategoryStorage for DbConnection {
    async fn store_category(&self, category: &BuffetCategory) -> Result<()> {
        let mut categories: Vec<BuffetCategory> =
            self.load_collection(CATEGORY_STORE_SLOT).await?;
        categories.push(category.clone());
        self.save_collection(CATEGORY_STORE_SLOT, &categories).await
    }

    async fn get_category(&self, category_id: &str) -> Result<Option<BuffetCategory>> {
        let categories: Vec<BuffetCategory> = self.load_collection(CATEGORY_STORE_SLOT).await?;
        Ok(categories.into_iter().find(|c| c.id == category_id))
    }

    async fn list_categories(&self) -> Result<Vec<BuffetCategory>> {
        self.load_collection(CATEGORY_STORE_SLOT).await
    }

    async fn update_category(&self, category: &BuffetCategory) -> Result<bool> {
        let mut categories: Vec<BuffetCategory> =
            self.load_collection(CATEGORY_STORE_SLOT).await?;
        match categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => *existing = category.clone(),
            None => return Ok(false),
        }
        self.save_collection(CATEGORY_STORE_SLOT, &categories).await?;
        Ok(true)
    }

    async fn delete_category(&self, category_id: &str) -> Result<bool> {
        let mut categories: Vec<BuffetCategory> =
            self.load_collection(CATEGORY_STORE_SLOT).await?;
        let original_len = categories.len();
        categories.retain(|c| c.id != category_id);

        if categories.len() == original_len {
            return Ok(false);
        }
        self.save_collection(CATEGORY_STORE_SLOT, &categories).await?;
        Ok(true)
    }
}

#[async_trait]
impl BookingStorage for DbConnection {
    async fn store_booking(&self, booking: &Booking) -> Result<()> {
        let mut bookings: Vec<Booking> = self.load_collection(BOOKING_STORE_SLOT).await?;
        bookings.push(booking.clone());
        self.save_collection(BOOKING_STORE_SLOT, &bookings).await
    }

    async fn get_booking(&self, booking_id: &str) -> Result<Option<Booking>> {
        let bookings: Vec<Booking> = self.load_collection(BOOKING_STORE_SLOT).await?;
        Ok(bookings.into_iter().find(|b| b.id == booking_id))
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>> {
        self.load_collection(BOOKING_STORE_SLOT).await
    }

    async fn update_booking(&self, booking: &Booking) -> Result<bool> {
        let mut bookings: Vec<Booking> = self.load_collection(BOOKING_STORE_SLOT).await?;
        match bookings.iter_mut().find(|b| b.id == booking.id) {
            Some(existing) => *existing = booking.clone(),
            None => return Ok(false),
        }
        self.save_collection(BOOKING_STORE_SLOT, &bookings).await?;
        Ok(true)
    }

    async fn delete_booking(&self, booking_id: &str) -> Result<bool> {
        let mut bookings: Vec<Booking> = self.load_collection(BOOKING_STORE_SLOT).await?;
        let original_len = bookings.len();
        bookings.retain(|b| b.id != booking_id);

        if bookings.len() == original_len {
            return Ok(false);
        }
        self.save_collection(BOOKING_STORE_SLOT, &bookings).await?;
        Ok(true)
    }
}

#[async_trait]
impl SettingsStorage for DbConnection {
    async fn get_settings(&self) -> Result<RestaurantSettings> {
        match self.read_slot(SETTINGS_STORE_SLOT).await? {
            Some(content) => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse slot {}", SETTINGS_STORE_SLOT)),
            None => {
                let settings = RestaurantSettings::default();
                self.update_settings(&settings).await?;
                Ok(settings)
            }
        }
    }

    async fn update_settings(&self, settings: &RestaurantSettings) -> Result<()> {
        let content = serde_json::to_string(settings).context("Failed to serialize settings")?;
        self.write_slot(SETTINGS_STORE_SLOT, &content).await
    }
}

#[async_trait]
impl OrganizationStorage for DbConnection {
    async fn store_organization(&self, organization: &Organization) -> Result<()> {
        let mut organizations: Vec<Organization> =
            self.load_collection(ORGANIZATION_STORE_SLOT).await?;
        organizations.push(organization.clone());
        self.save_collection(ORGANIZATION_STORE_SLOT, &organizations).await
    }

    async fn get_organization(&self, organization_id: &str) -> Result<Option<Organization>> {
        let organizations: Vec<Organization> =
            self.load_collection(ORGANIZATION_STORE_SLOT).await?;
        Ok(organizations.into_iter().find(|o| o.id == organization_id))
    }

    async fn list_organizations(&self) -> Result<Vec<Organization>> {
        self.load_collection(ORGANIZATION_STORE_SLOT).await
    }

    async fn update_organization(&self, organization: &Organization) -> Result<bool> {
        let mut organizations: Vec<Organization> =
            self.load_collection(ORGANIZATION_STORE_SLOT).await?;
        match organizations.iter_mut().find(|o| o.id == organization.id) {
            Some(existing) => *existing = organization.clone(),
            None => return Ok(false),
        }
        self.save_collection(ORGANIZATION_STORE_SLOT, &organizations).await?;
        Ok(true)
    }

    async fn delete_organization(&self, organization_id: &str) -> Result<bool> {
        let mut organizations: Vec<Organization> =
            self.load_collection(ORGANIZATION_STORE_SLOT).await?;
        let original_len = organizations.len();
        organizations.retain(|o| o.id != organization_id);

        if organizations.len() == original_len {
            return Ok(false);
        }
        self.save_collection(ORGANIZATION_STORE_SLOT, &organizations).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_category(id: &str) -> BuffetCategory {
        let now = Utc::now();
        BuffetCategory {
            id: id.to_string(),
            name: "Veg Buffet".to_string(),
            description: "All vegetarian".to_string(),
            price_per_plate: 15.0,
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_booking(id: &str) -> Booking {
        let now = Utc::now();
        Booking {
            id: id.to_string(),
            name: "Alice".to_string(),
            phone: "5551234567".to_string(),
            no_of_persons: 4,
            category_id: "c1".to_string(),
            qr_code: Some(format!("/check-in/{}", id)),
            checked_in: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn category_crud_round_trip() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");

        let category = sample_category("c1");
        db.store_category(&category).await.expect("Failed to store category");
        assert_eq!(
            db.get_category("c1").await.expect("Failed to get category"),
            Some(category.clone())
        );

        let mut renamed = category.clone();
        renamed.name = "Seafood".to_string();
        assert!(db.update_category(&renamed).await.expect("Failed to update category"));
        assert_eq!(
            db.get_category("c1")
                .await
                .expect("Failed to get category")
                .expect("Category missing")
                .name,
            "Seafood"
        );

        assert!(db.delete_category("c1").await.expect("Failed to delete category"));
        assert!(!db.delete_category("c1").await.expect("Failed to delete category"));
    }

    #[tokio::test]
    async fn booking_timestamps_survive_the_slot_round_trip() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");

        let booking = sample_booking("b1");
        db.store_booking(&booking).await.expect("Failed to store booking");

        let loaded = db
            .get_booking("b1")
            .await
            .expect("Failed to get booking")
            .expect("Booking missing");
        assert_eq!(loaded, booking);
        assert_eq!(loaded.created_at, booking.created_at);
    }

    #[tokio::test]
    async fn settings_first_read_creates_defaults() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");

        let settings = db.get_settings().await.expect("Failed to get settings");
        assert_eq!(settings, RestaurantSettings::default());

        let mut updated = settings;
        updated.name = "Blue Lotus".to_string();
        db.update_settings(&updated).await.expect("Failed to update settings");
        assert_eq!(
            db.get_settings().await.expect("Failed to get settings").name,
            "Blue Lotus"
        );
    }

    #[tokio::test]
    async fn organization_update_is_visible_after_write() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");

        let organization = Organization {
            id: "o1".to_string(),
            name: "Acme Events".to_string(),
            email: "events@example.com".to_string(),
            phone: "5559876543".to_string(),
        };
        db.store_organization(&organization)
            .await
            .expect("Failed to store organization");

        let mut updated = organization.clone();
        updated.name = "Acme Catering".to_string();
        assert!(db
            .update_organization(&updated)
            .await
            .expect("Failed to update organization"));
        assert_eq!(
            db.get_organization("o1")
                .await
                .expect("Failed to get organization")
                .expect("Organization missing")
                .name,
            "Acme Catering"
        );
    }

    #[tokio::test]
    async fn slots_are_independent() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");

        db.store_category(&sample_category("c1")).await.expect("Failed to store category");
        db.store_booking(&sample_booking("b1")).await.expect("Failed to store booking");
        assert!(db.delete_category("c1").await.expect("Failed to delete category"));

        // Removing the category never touches the booking slot
        assert!(db
            .get_booking("b1")
            .await
            .expect("Failed to get booking")
            .is_some());
    }
}
