//! QR deep-link payload contract.
//!
//! Scannable codes carry a deep-link path: `/check-in/{bookingId}` for
//! bookings and `/categories/{categoryId}` for categories. Consumers match
//! by substring, so a payload may carry an origin prefix
//! (`https://host/check-in/abc`) and still resolve. This module is also the
//! seam where a real camera decoder's text output would enter the system.

use shared::Booking;
use thiserror::Error;

/// Path prefix of a booking check-in deep link
pub const CHECK_IN_PREFIX: &str = "/check-in/";
/// Path prefix of a category deep link
pub const CATEGORY_PREFIX: &str = "/categories/";

/// Record a scanned payload resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrTarget {
    Booking(String),
    Category(String),
}

/// Failure to interpret a scanned payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QrParseError {
    #[error("payload does not contain a recognized deep-link prefix")]
    UnrecognizedFormat,
    #[error("payload contains a deep-link prefix but no identifier")]
    MissingIdentifier,
}

/// Build the check-in payload for a booking id
pub fn check_in_payload(booking_id: &str) -> String {
    format!("{}{}", CHECK_IN_PREFIX, booking_id)
}

/// Build the deep-link payload for a category id
pub fn category_payload(category_id: &str) -> String {
    format!("{}{}", CATEGORY_PREFIX, category_id)
}

/// The payload to render for a booking: its stored code, or the derived
/// check-in link when none was attached
pub fn payload_for(booking: &Booking) -> String {
    match &booking.qr_code {
        Some(code) => code.clone(),
        None => check_in_payload(&booking.id),
    }
}

/// Resolve a scanned payload to the record it points at
pub fn parse_payload(data: &str) -> Result<QrTarget, QrParseError> {
    if let Some(idx) = data.find(CHECK_IN_PREFIX) {
        let id = &data[idx + CHECK_IN_PREFIX.len()..];
        if id.is_empty() {
            return Err(QrParseError::MissingIdentifier);
        }
        return Ok(QrTarget::Booking(id.to_string()));
    }

    if let Some(idx) = data.find(CATEGORY_PREFIX) {
        let id = &data[idx + CATEGORY_PREFIX.len()..];
        if id.is_empty() {
            return Err(QrParseError::MissingIdentifier);
        }
        return Ok(QrTarget::Category(id.to_string()));
    }

    Err(QrParseError::UnrecognizedFormat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn payloads_parse_back_to_their_id() {
        assert_eq!(
            parse_payload(&check_in_payload("b1")),
            Ok(QrTarget::Booking("b1".to_string()))
        );
        assert_eq!(
            parse_payload(&category_payload("c1")),
            Ok(QrTarget::Category("c1".to_string()))
        );
    }

    #[test]
    fn origin_prefixed_payloads_parse_the_same() {
        assert_eq!(
            parse_payload("https://buffet.example.com/check-in/b1"),
            Ok(QrTarget::Booking("b1".to_string()))
        );
        assert_eq!(
            parse_payload("https://buffet.example.com/categories/c1"),
            Ok(QrTarget::Category("c1".to_string()))
        );
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(parse_payload("hello world"), Err(QrParseError::UnrecognizedFormat));
        assert_eq!(parse_payload(""), Err(QrParseError::UnrecognizedFormat));
    }

    #[test]
    fn prefix_without_identifier_is_rejected() {
        assert_eq!(parse_payload("/check-in/"), Err(QrParseError::MissingIdentifier));
        assert_eq!(parse_payload("/categories/"), Err(QrParseError::MissingIdentifier));
    }

    #[test]
    fn booking_payload_falls_back_to_derived_link() {
        let now = Utc::now();
        let mut booking = Booking {
            id: "b1".to_string(),
            name: "Alice".to_string(),
            phone: "5551234567".to_string(),
            no_of_persons: 4,
            category_id: "c1".to_string(),
            qr_code: None,
            checked_in: false,
            created_at: now,
            updated_at: now,
        };

        assert_eq!(payload_for(&booking), "/check-in/b1");

        booking.qr_code = Some("https://host/check-in/b1".to_string());
        assert_eq!(payload_for(&booking), "https://host/check-in/b1");
    }
}
