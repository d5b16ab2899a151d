//! # Buffet Tracker Backend
//!
//! Contains all non-UI logic for the buffet booking dashboard.
//!
//! This crate is the orchestration layer that brings together:
//! - **Domain**: services for categories, bookings, settings and
//!   organizations, plus derived dashboard views, the QR payload contract
//!   and form validation rules
//! - **Storage**: durable slot persistence (JSON files or SQLite)
//!
//! The backend is UI-agnostic: a desktop shell, a web frontend or a CLI
//! can all drive it through [`AppState`] without modification. The UI
//! layer owns input validation (via [`domain::forms`]), confirmation
//! dialogs and rendering; the services here are the complete data surface.
//!
//! ## Architecture
//!
//! ```text
//! UI layer (out of scope)
//!     ↓
//! Domain layer (services, QR contract, validation rules)
//!     ↓
//! Storage layer (slot persistence: JSON files / SQLite)
//! ```
//!
//! Execution is single-process and effectively single-writer: every
//! operation completes before control returns to the caller, and two
//! concurrent app instances over the same data directory are
//! last-writer-wins by design.

pub mod domain;
pub mod storage;

use anyhow::Result;
use log::info;
use std::path::Path;
use std::sync::Arc;

use crate::domain::{
    BookingService, CategoryService, DashboardService, OrganizationService, SettingsService,
};
use crate::storage::json::{
    BookingRepository, CategoryRepository, JsonConnection, OrganizationRepository,
    SettingsRepository,
};
use crate::storage::{BookingStorage, CategoryStorage, OrganizationStorage, SettingsStorage};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub category_service: CategoryService,
    pub booking_service: BookingService,
    pub settings_service: SettingsService,
    pub organization_service: OrganizationService,
    pub dashboard_service: DashboardService,
}

/// Initialize the backend over a specific data directory
pub fn initialize_backend<P: AsRef<Path>>(data_directory: P) -> Result<AppState> {
    info!("Setting up storage");
    let connection = JsonConnection::new(data_directory)?;

    let category_storage: Arc<dyn CategoryStorage> =
        Arc::new(CategoryRepository::new(connection.clone()));
    let booking_storage: Arc<dyn BookingStorage> =
        Arc::new(BookingRepository::new(connection.clone()));
    let settings_storage: Arc<dyn SettingsStorage> =
        Arc::new(SettingsRepository::new(connection.clone()));
    let organization_storage: Arc<dyn OrganizationStorage> =
        Arc::new(OrganizationRepository::new(connection));

    info!("Setting up domain services");
    let app_state = AppState {
        category_service: CategoryService::new(category_storage.clone()),
        booking_service: BookingService::new(booking_storage.clone()),
        settings_service: SettingsService::new(settings_storage),
        organization_service: OrganizationService::new(organization_storage),
        dashboard_service: DashboardService::new(category_storage, booking_storage),
    };

    Ok(app_state)
}

/// Initialize the backend in the default platform data directory
pub fn initialize_backend_default() -> Result<AppState> {
    let connection = JsonConnection::new_default()?;
    initialize_backend(connection.base_directory())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::qr::{self, QrTarget};
    use shared::{CreateBookingRequest, CreateCategoryRequest};
    use tempfile::TempDir;

    /// Walk the main booking flow end to end against one data directory
    #[tokio::test]
    async fn booking_flow_end_to_end() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let app = initialize_backend(temp_dir.path()).expect("Failed to initialize backend");

        let category = app
            .category_service
            .create_category(CreateCategoryRequest {
                name: "Veg Buffet".to_string(),
                description: "All vegetarian spread".to_string(),
                price_per_plate: 15.0,
            })
            .await
            .expect("Failed to create category")
            .category;

        let booking = app
            .booking_service
            .create_booking(CreateBookingRequest {
                name: "Alice".to_string(),
                phone: "5551234567".to_string(),
                no_of_persons: 4,
                category_id: category.id.clone(),
            })
            .await
            .expect("Failed to create booking")
            .booking;

        // The attached QR payload scans back to the booking
        let payload = qr::payload_for(&booking);
        assert_eq!(
            qr::parse_payload(&payload),
            Ok(QrTarget::Booking(booking.id.clone()))
        );

        let checked_in = app
            .booking_service
            .check_in(&booking.id)
            .await
            .expect("Failed to check in")
            .expect("Booking missing");
        assert!(checked_in.checked_in);

        let details = app
            .dashboard_service
            .booking_details(&booking.id)
            .await
            .expect("Failed to load details")
            .expect("Booking missing");
        assert_eq!(details.total_amount, Some(60.0));

        // A fresh backend over the same directory rehydrates everything
        let reopened = initialize_backend(temp_dir.path()).expect("Failed to reopen backend");
        let bookings = reopened
            .booking_service
            .list_bookings()
            .await
            .expect("Failed to list bookings")
            .bookings;
        assert_eq!(bookings.len(), 1);
        assert!(bookings[0].checked_in);
        assert_eq!(bookings[0].created_at, booking.created_at);

        let settings = reopened
            .settings_service
            .get_settings()
            .await
            .expect("Failed to get settings");
        assert_eq!(settings.name, "Akairis");
    }
}
