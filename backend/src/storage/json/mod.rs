//! # JSON Storage Module
//!
//! File-based storage backend: each store's durable slot is a single JSON
//! document (`<slot>.json`) inside the data directory, rewritten in full on
//! every mutation and parsed in full on every read.
//!
//! ## File layout
//!
//! ```text
//! data/
//! ├── category-store.json      ← array of BuffetCategory records
//! ├── user-store.json          ← array of Booking records
//! ├── settings-store.json      ← single RestaurantSettings object
//! └── organization-store.json  ← array of Organization records
//! ```
//!
//! Records serialize with camelCase field names and RFC 3339 timestamps,
//! which keeps the documents interchangeable with data written by earlier
//! versions of the dashboard. Writes go through a temp file and rename so
//! a crash mid-write never leaves a half-written slot behind.

pub mod connection;
pub mod category_repository;
pub mod booking_repository;
pub mod settings_repository;
pub mod organization_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::JsonConnection;
pub use category_repository::CategoryRepository;
pub use booking_repository::BookingRepository;
pub use settings_repository::SettingsRepository;
pub use organization_repository::OrganizationRepository;
