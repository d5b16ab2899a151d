use anyhow::Result;
use chrono::Utc;
use log::{info, warn};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::qr;
use crate::storage::BookingStorage;
use shared::{
    Booking, BookingListResponse, BookingResponse, CreateBookingRequest, UpdateBookingRequest,
};

/// Service for managing customer bookings and their check-in state
#[derive(Clone)]
pub struct BookingService {
    storage: Arc<dyn BookingStorage>,
}

impl BookingService {
    /// Create a new BookingService
    pub fn new(storage: Arc<dyn BookingStorage>) -> Self {
        Self { storage }
    }

    /// Create a new booking.
    ///
    /// The QR payload embeds the booking's id, so it is derived from the
    /// freshly generated id and stored with the record in one step; there
    /// is no window where a booking exists without its code. The response
    /// carries the full record, id included, for callers that follow up
    /// with an update.
    pub async fn create_booking(&self, request: CreateBookingRequest) -> Result<BookingResponse> {
        info!(
            "Creating booking: name={}, persons={}",
            request.name, request.no_of_persons
        );

        let now = Utc::now();
        let id = Uuid::new_v4().to_string();
        let booking = Booking {
            qr_code: Some(qr::check_in_payload(&id)),
            id,
            name: request.name,
            phone: request.phone,
            no_of_persons: request.no_of_persons,
            category_id: request.category_id,
            checked_in: false,
            created_at: now,
            updated_at: now,
        };

        self.storage.store_booking(&booking).await?;

        info!("Created booking {} with ID: {}", booking.name, booking.id);

        Ok(BookingResponse {
            booking,
            success_message: "Booking created successfully".to_string(),
        })
    }

    /// Get a booking by ID
    pub async fn get_booking(&self, booking_id: &str) -> Result<Option<Booking>> {
        self.storage.get_booking(booking_id).await
    }

    /// List all bookings
    pub async fn list_bookings(&self) -> Result<BookingListResponse> {
        let bookings = self.storage.list_bookings().await?;
        Ok(BookingListResponse { bookings })
    }

    /// Merge the provided fields into an existing booking and refresh its
    /// `updated_at` stamp.
    ///
    /// Returns `Ok(None)` when no booking has the given id.
    pub async fn update_booking(
        &self,
        booking_id: &str,
        request: UpdateBookingRequest,
    ) -> Result<Option<Booking>> {
        let mut booking = match self.storage.get_booking(booking_id).await? {
            Some(booking) => booking,
            None => {
                warn!("Update requested for unknown booking: {}", booking_id);
                return Ok(None);
            }
        };

        if let Some(name) = request.name {
            booking.name = name;
        }
        if let Some(phone) = request.phone {
            booking.phone = phone;
        }
        if let Some(no_of_persons) = request.no_of_persons {
            booking.no_of_persons = no_of_persons;
        }
        if let Some(category_id) = request.category_id {
            booking.category_id = category_id;
        }
        if let Some(qr_code) = request.qr_code {
            booking.qr_code = Some(qr_code);
        }
        booking.updated_at = Utc::now();

        self.storage.update_booking(&booking).await?;

        info!("Updated booking {} with ID: {}", booking.name, booking.id);

        Ok(Some(booking))
    }

    /// Delete a booking by ID. Returns false when no booking had the id.
    pub async fn delete_booking(&self, booking_id: &str) -> Result<bool> {
        let deleted = self.storage.delete_booking(booking_id).await?;

        if deleted {
            info!("Deleted booking with ID: {}", booking_id);
        } else {
            warn!("Delete requested for unknown booking: {}", booking_id);
        }

        Ok(deleted)
    }

    /// Mark a booking as checked in.
    ///
    /// The transition is one-way: nothing exposed by this service flips
    /// `checked_in` back to false. Checking in an already checked-in
    /// booking is harmless; `updated_at` still advances, matching generic
    /// update semantics.
    pub async fn check_in(&self, booking_id: &str) -> Result<Option<Booking>> {
        let mut booking = match self.storage.get_booking(booking_id).await? {
            Some(booking) => booking,
            None => {
                warn!("Check-in requested for unknown booking: {}", booking_id);
                return Ok(None);
            }
        };

        if booking.checked_in {
            info!("Booking {} is already checked in", booking_id);
        }

        booking.checked_in = true;
        booking.updated_at = Utc::now();

        self.storage.update_booking(&booking).await?;

        info!("Checked in booking {} with ID: {}", booking.name, booking.id);

        Ok(Some(booking))
    }
}
