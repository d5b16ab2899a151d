use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A buffet offering with a per-plate price.
///
/// Field names serialize in camelCase so persisted records keep the layout
/// existing dashboard data was written with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuffetCategory {
    pub id: String,
    /// Short label, expected to stay within 1-50 characters (form-enforced)
    pub name: String,
    /// Free text, expected to stay within 1-200 characters (form-enforced)
    pub description: String,
    /// Non-negative currency amount charged per person
    pub price_per_plate: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A customer's reservation for a buffet category.
///
/// `updated_at` doubles as the check-in time once `checked_in` flips to
/// true, since check-in is recorded as a field update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub name: String,
    pub phone: String,
    /// Party size, 1-20 inclusive (form-enforced)
    pub no_of_persons: u32,
    /// Reference to a `BuffetCategory` id; not referentially enforced, so
    /// readers must tolerate a dangling reference
    pub category_id: String,
    /// Check-in deep-link payload, populated at creation
    pub qr_code: Option<String>,
    pub checked_in: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Amount owed for this booking at the given category's rate
    pub fn total_amount(&self, category: &BuffetCategory) -> f64 {
        self.no_of_persons as f64 * category.price_per_plate
    }
}

/// Display theme for the dashboard UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

/// Restaurant-wide settings singleton.
///
/// Always fully populated: first access creates the defaults, updates merge
/// in place, and nothing ever deletes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSettings {
    pub name: String,
    pub contact_info: String,
    pub logo: Option<String>,
    pub theme: ThemeMode,
}

impl Default for RestaurantSettings {
    fn default() -> Self {
        Self {
            name: "Akairis".to_string(),
            contact_info: "+1 (555) 123-4567".to_string(),
            logo: None,
            theme: ThemeMode::Light,
        }
    }
}

/// A partner organization record. Unlike categories and bookings these
/// records carry no timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

// ---------------------------------------------------------------------------
// Category requests and responses
// ---------------------------------------------------------------------------

/// Input for creating a buffet category; id and timestamps are generated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: String,
    pub price_per_plate: f64,
}

/// Partial update for a buffet category; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_per_plate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub category: BuffetCategory,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListResponse {
    pub categories: Vec<BuffetCategory>,
}

// ---------------------------------------------------------------------------
// Booking requests and responses
// ---------------------------------------------------------------------------

/// Input for creating a booking; id, QR payload, timestamps and the
/// check-in flag are all generated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub name: String,
    pub phone: String,
    pub no_of_persons: u32,
    pub category_id: String,
}

/// Partial update for a booking.
///
/// `checked_in` is deliberately absent: the only exposed transition is
/// `BookingService::check_in`, which never reverses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub no_of_persons: Option<u32>,
    pub category_id: Option<String>,
    pub qr_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking: Booking,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingListResponse {
    pub bookings: Vec<Booking>,
}

// ---------------------------------------------------------------------------
// Settings requests
// ---------------------------------------------------------------------------

/// Partial update for the settings singleton
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub name: Option<String>,
    pub contact_info: Option<String>,
    pub logo: Option<String>,
    pub theme: Option<ThemeMode>,
}

// ---------------------------------------------------------------------------
// Organization requests and responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganizationRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationResponse {
    pub organization: Organization,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationListResponse {
    pub organizations: Vec<Organization>,
}

// ---------------------------------------------------------------------------
// Form validation
// ---------------------------------------------------------------------------

/// Result of validating form input before it reaches a store.
///
/// The stores accept any well-typed input; these results exist for the
/// form layer to reject bad data up front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValidation {
    pub is_valid: bool,
    pub errors: Vec<FormValidationError>,
}

impl FormValidation {
    pub fn from_errors(errors: Vec<FormValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Specific form validation failures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormValidationError {
    EmptyName,
    NameTooLong(usize),
    EmptyDescription,
    DescriptionTooLong(usize),
    NegativePrice,
    InvalidPrice,
    PhoneTooShort,
    PhoneTooLong,
    PartyTooSmall,
    PartyTooLarge(u32),
    MissingCategory,
    InvalidEmail,
    EmptyContactInfo,
    ContactInfoTooLong(usize),
}

// ---------------------------------------------------------------------------
// Dashboard views
// ---------------------------------------------------------------------------

/// Aggregate figures for the dashboard stat cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_categories: usize,
    pub total_bookings: usize,
    /// Bookings created today (local date)
    pub today_bookings: usize,
    pub checked_in: usize,
    pub pending_check_ins: usize,
    pub total_revenue: f64,
    pub today_revenue: f64,
    pub average_party_size: f64,
    /// Categories with at least one booking
    pub active_categories: usize,
    pub bookings_by_category: Vec<CategoryBookingCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBookingCount {
    pub category_name: String,
    pub count: usize,
}

/// Per-category rollup for the category performance panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPerformance {
    pub category_id: String,
    pub category_name: String,
    pub price_per_plate: f64,
    pub bookings: usize,
    pub total_persons: u32,
    pub checked_in: usize,
    pub revenue: f64,
}

/// One day in the revenue trend chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenuePoint {
    pub date: chrono::NaiveDate,
    pub revenue: f64,
    pub bookings: usize,
}

/// Kind of event in the recent activity feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Booking,
    CheckIn,
}

/// One entry in the recent activity feed, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub booking_id: String,
    pub customer_name: String,
    pub no_of_persons: u32,
    /// Resolved category name; `None` when the booking's category was
    /// deleted, which the UI renders as "Unknown"
    pub category_name: Option<String>,
    pub kind: ActivityKind,
    pub timestamp: DateTime<Utc>,
}

/// A booking joined with its category for the check-in screen.
///
/// `category` and `total_amount` are `None` when the referenced category
/// no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    pub booking: Booking,
    pub category: Option<BuffetCategory>,
    pub total_amount: Option<f64>,
}
