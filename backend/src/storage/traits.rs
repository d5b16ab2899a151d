//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.
//!
//! Each store gets its own focused trait. Mutations that target a missing
//! identifier report the miss through the return value (`false` / `None`)
//! instead of failing; errors are reserved for real persistence problems
//! (unreadable slots, serialization failures, I/O errors), which are
//! always surfaced rather than swallowed.

use anyhow::Result;
use async_trait::async_trait;
use shared::{Booking, BuffetCategory, Organization, RestaurantSettings};

/// Trait defining the interface for buffet category storage operations
#[async_trait]
pub trait CategoryStorage: Send + Sync {
    /// Append a new category to the collection
    async fn store_category(&self, category: &BuffetCategory) -> Result<()>;

    /// Retrieve a specific category by ID
    async fn get_category(&self, category_id: &str) -> Result<Option<BuffetCategory>>;

    /// List all categories in insertion order
    async fn list_categories(&self) -> Result<Vec<BuffetCategory>>;

    /// Replace the stored record with the same id.
    /// Returns true when a record was found and replaced.
    async fn update_category(&self, category: &BuffetCategory) -> Result<bool>;

    /// Remove a category by ID.
    /// Returns true if the category was found and deleted.
    async fn delete_category(&self, category_id: &str) -> Result<bool>;
}

/// Trait defining the interface for booking storage operations
#[async_trait]
pub trait BookingStorage: Send + Sync {
    /// Append a new booking to the collection
    async fn store_booking(&self, booking: &Booking) -> Result<()>;

    /// Retrieve a specific booking by ID
    async fn get_booking(&self, booking_id: &str) -> Result<Option<Booking>>;

    /// List all bookings in insertion order
    async fn list_bookings(&self) -> Result<Vec<Booking>>;

    /// Replace the stored record with the same id.
    /// Returns true when a record was found and replaced.
    async fn update_booking(&self, booking: &Booking) -> Result<bool>;

    /// Remove a booking by ID.
    /// Returns true if the booking was found and deleted.
    async fn delete_booking(&self, booking_id: &str) -> Result<bool>;
}

/// Trait defining the interface for the restaurant settings singleton.
///
/// The singleton always has a value: backends materialize and persist the
/// defaults the first time it is read.
#[async_trait]
pub trait SettingsStorage: Send + Sync {
    /// Get the settings singleton, creating the defaults on first access
    async fn get_settings(&self) -> Result<RestaurantSettings>;

    /// Replace the settings singleton
    async fn update_settings(&self, settings: &RestaurantSettings) -> Result<()>;
}

/// Trait defining the interface for organization storage operations
#[async_trait]
pub trait OrganizationStorage: Send + Sync {
    /// Append a new organization to the collection
    async fn store_organization(&self, organization: &Organization) -> Result<()>;

    /// Retrieve a specific organization by ID
    async fn get_organization(&self, organization_id: &str) -> Result<Option<Organization>>;

    /// List all organizations in insertion order
    async fn list_organizations(&self) -> Result<Vec<Organization>>;

    /// Replace the stored record with the same id.
    /// Returns true when a record was found and replaced.
    async fn update_organization(&self, organization: &Organization) -> Result<bool>;

    /// Remove an organization by ID.
    /// Returns true if the organization was found and deleted.
    async fn delete_organization(&self, organization_id: &str) -> Result<bool>;
}
