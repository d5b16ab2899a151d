//! # Storage Module
//!
//! Handles all data persistence for the buffet tracker.
//!
//! Every store persists its entire collection (or singleton) to a single
//! named durable slot on each mutation, and rehydrates from that slot when
//! the backend starts. There is no delta persistence and no schema
//! migration path; a slot either parses into the current record shape or
//! loading fails loudly.
//!
//! ## Key Responsibilities
//!
//! - **Data Persistence**: writing each store's full state after a mutation
//! - **Data Retrieval**: loading stored state back into memory
//! - **Storage Abstraction**: one trait per store so backends can be
//!   swapped without touching domain logic
//!
//! ## Backends
//!
//! - **JSON files** (`json`): one `<slot>.json` document per store in the
//!   data directory, written atomically. This is the primary backend.
//! - **SQLite** (`sqlite`): the same slot documents kept in a single
//!   key-value table, for embedders that prefer one database file.
//!
//! ## Design Principles
//!
//! - **Repository Pattern**: clean separation between domain and data access
//! - **Dependency Inversion**: domain services hold `Arc<dyn ...Storage>`
//!   handles, never a concrete backend
//! - **Testability**: backends are constructed over temp directories or
//!   in-memory databases in tests

pub mod traits;
pub mod json;
pub mod sqlite;

/// Slot name for the buffet category collection
pub const CATEGORY_STORE_SLOT: &str = "category-store";
/// Slot name for the booking collection. The name predates the rename of
/// "users" to "bookings"; existing data files still use it.
pub const BOOKING_STORE_SLOT: &str = "user-store";
/// Slot name for the restaurant settings singleton
pub const SETTINGS_STORE_SLOT: &str = "settings-store";
/// Slot name for the organization collection
pub const ORGANIZATION_STORE_SLOT: &str = "organization-store";

pub use json::JsonConnection;
pub use json::{
    BookingRepository, CategoryRepository, OrganizationRepository, SettingsRepository,
};
pub use sqlite::DbConnection;
pub use traits::{BookingStorage, CategoryStorage, OrganizationStorage, SettingsStorage};
