use anyhow::{Context, Result};
use async_trait::async_trait;
use shared::Booking;

use super::connection::JsonConnection;
use crate::storage::traits::BookingStorage;
use crate::storage::BOOKING_STORE_SLOT;

/// JSON-file booking repository. Every mutation rewrites the whole
/// collection document.
#[derive(Clone)]
pub struct BookingRepository {
    connection: JsonConnection,
}

impl BookingRepository {
    /// Create a new JSON booking repository
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn load_bookings(&self) -> Result<Vec<Booking>> {
        match self.connection.read_slot(BOOKING_STORE_SLOT)? {
            Some(content) => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse slot {}", BOOKING_STORE_SLOT)),
            None => Ok(Vec::new()),
        }
    }

    fn save_bookings(&self, bookings: &[Booking]) -> Result<()> {
        let content =
            serde_json::to_string_pretty(bookings).context("Failed to serialize bookings")?;
        self.connection.write_slot(BOOKING_STORE_SLOT, &content)
    }
}

#[async_trait]
impl BookingStorage for BookingRepository {
    async fn store_booking(&self, booking: &Booking) -> Result<()> {
        let mut bookings = self.load_bookings()?;
        bookings.push(booking.clone());
        self.save_bookings(&bookings)
    }

    async fn get_booking(&self, booking_id: &str) -> Result<Option<Booking>> {
        let bookings = self.load_bookings()?;
        Ok(bookings.into_iter().find(|b| b.id == booking_id))
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>> {
        self.load_bookings()
    }

    async fn update_booking(&self, booking: &Booking) -> Result<bool> {
        let mut bookings = self.load_bookings()?;
        match bookings.iter_mut().find(|b| b.id == booking.id) {
            Some(existing) => *existing = booking.clone(),
            None => return Ok(false),
        }
        self.save_bookings(&bookings)?;
        Ok(true)
    }

    async fn delete_booking(&self, booking_id: &str) -> Result<bool> {
        let mut bookings = self.load_bookings()?;
        let original_len = bookings.len();
        bookings.retain(|b| b.id != booking_id);

        if bookings.len() == original_len {
            return Ok(false);
        }
        self.save_bookings(&bookings)?;
        Ok(true)
    }
}
