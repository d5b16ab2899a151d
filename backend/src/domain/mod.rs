//! # Domain Module
//!
//! Contains all business logic for the buffet tracker.
//!
//! Each store gets a focused service that owns its operations; services
//! never reach into another store's internals, and cross-store views
//! (dashboard figures, check-in details) live in their own read-only
//! service that composes the stores through their public storage handles.
//!
//! ## Module Organization
//!
//! - **category_service**: buffet category CRUD
//! - **booking_service**: booking CRUD plus the one-way check-in transition
//! - **settings_service**: the restaurant settings singleton
//! - **organization_service**: partner organization CRUD
//! - **dashboard_service**: derived figures over categories and bookings
//! - **qr**: the deep-link payload contract for scannable codes
//! - **forms**: the validation rules the form layer applies before
//!   submitting to a store
//!
//! ## Business Rules
//!
//! - Stores accept any well-typed input; validation is the form layer's job
//! - Mutations on unknown identifiers are harmless no-ops, never failures
//! - `created_at` is stamped once; every mutation refreshes `updated_at`
//! - Check-in only ever flips `checked_in` false → true
//! - Deleting a category leaves bookings that reference it untouched;
//!   readers degrade when the reference dangles

pub mod booking_service;
pub mod category_service;
pub mod dashboard_service;
pub mod forms;
pub mod organization_service;
pub mod qr;
pub mod settings_service;

pub use booking_service::BookingService;
pub use category_service::CategoryService;
pub use dashboard_service::DashboardService;
pub use organization_service::OrganizationService;
pub use settings_service::SettingsService;
