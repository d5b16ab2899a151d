use anyhow::Result;
use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use std::cmp::Ordering;
use std::sync::Arc;

use crate::storage::{BookingStorage, CategoryStorage};
use shared::{
    ActivityEntry, ActivityKind, Booking, BookingDetails, BuffetCategory, CategoryBookingCount,
    CategoryPerformance, DashboardStats, RevenuePoint,
};

/// Read-only views derived from the category and booking stores.
///
/// This service composes the stores through their public storage handles
/// the same way the dashboard screens do; it never mutates anything. A
/// booking whose category was deleted contributes zero revenue and an
/// absent category name rather than failing.
#[derive(Clone)]
pub struct DashboardService {
    categories: Arc<dyn CategoryStorage>,
    bookings: Arc<dyn BookingStorage>,
}

/// Local calendar date a timestamp falls on, for "today" bucketing
fn local_date(timestamp: DateTime<Utc>) -> NaiveDate {
    timestamp.with_timezone(&Local).date_naive()
}

fn booking_revenue(booking: &Booking, categories: &[BuffetCategory]) -> f64 {
    categories
        .iter()
        .find(|c| c.id == booking.category_id)
        .map(|c| booking.total_amount(c))
        .unwrap_or(0.0)
}

impl DashboardService {
    /// Create a new DashboardService
    pub fn new(categories: Arc<dyn CategoryStorage>, bookings: Arc<dyn BookingStorage>) -> Self {
        Self {
            categories,
            bookings,
        }
    }

    /// Aggregate figures for the stat cards
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        let categories = self.categories.list_categories().await?;
        let bookings = self.bookings.list_bookings().await?;
        let today = Local::now().date_naive();

        let today_bookings: Vec<&Booking> = bookings
            .iter()
            .filter(|b| local_date(b.created_at) == today)
            .collect();
        let checked_in = bookings.iter().filter(|b| b.checked_in).count();

        let total_revenue: f64 = bookings
            .iter()
            .map(|b| booking_revenue(b, &categories))
            .sum();
        let today_revenue: f64 = today_bookings
            .iter()
            .map(|b| booking_revenue(b, &categories))
            .sum();

        let average_party_size = if bookings.is_empty() {
            0.0
        } else {
            bookings.iter().map(|b| b.no_of_persons as f64).sum::<f64>() / bookings.len() as f64
        };

        let bookings_by_category: Vec<CategoryBookingCount> = categories
            .iter()
            .map(|category| CategoryBookingCount {
                category_name: category.name.clone(),
                count: bookings.iter().filter(|b| b.category_id == category.id).count(),
            })
            .collect();
        let active_categories = bookings_by_category.iter().filter(|c| c.count > 0).count();

        Ok(DashboardStats {
            total_categories: categories.len(),
            total_bookings: bookings.len(),
            today_bookings: today_bookings.len(),
            checked_in,
            pending_check_ins: bookings.len() - checked_in,
            total_revenue,
            today_revenue,
            average_party_size,
            active_categories,
            bookings_by_category,
        })
    }

    /// Per-category rollup, sorted by revenue descending
    pub async fn category_performance(&self) -> Result<Vec<CategoryPerformance>> {
        let categories = self.categories.list_categories().await?;
        let bookings = self.bookings.list_bookings().await?;

        let mut performance: Vec<CategoryPerformance> = categories
            .iter()
            .map(|category| {
                let category_bookings: Vec<&Booking> = bookings
                    .iter()
                    .filter(|b| b.category_id == category.id)
                    .collect();

                CategoryPerformance {
                    category_id: category.id.clone(),
                    category_name: category.name.clone(),
                    price_per_plate: category.price_per_plate,
                    bookings: category_bookings.len(),
                    total_persons: category_bookings.iter().map(|b| b.no_of_persons).sum(),
                    checked_in: category_bookings.iter().filter(|b| b.checked_in).count(),
                    revenue: category_bookings
                        .iter()
                        .map(|b| b.total_amount(category))
                        .sum(),
                }
            })
            .collect();

        performance.sort_by(|a, b| b.revenue.partial_cmp(&a.revenue).unwrap_or(Ordering::Equal));
        Ok(performance)
    }

    /// Revenue and booking counts per local day for the last `days` days,
    /// oldest first, today included
    pub async fn revenue_trend(&self, days: u32) -> Result<Vec<RevenuePoint>> {
        let categories = self.categories.list_categories().await?;
        let bookings = self.bookings.list_bookings().await?;
        let today = Local::now().date_naive();

        let points = (0..days)
            .rev()
            .map(|offset| {
                let date = today - Duration::days(offset as i64);
                let day_bookings: Vec<&Booking> = bookings
                    .iter()
                    .filter(|b| local_date(b.created_at) == date)
                    .collect();

                RevenuePoint {
                    date,
                    revenue: day_bookings
                        .iter()
                        .map(|b| booking_revenue(b, &categories))
                        .sum(),
                    bookings: day_bookings.len(),
                }
            })
            .collect();

        Ok(points)
    }

    /// Booking-created and checked-in events, newest first, capped at
    /// `limit` entries. Check-ins are timestamped by `updated_at`, the
    /// moment the flag flipped.
    pub async fn recent_activity(&self, limit: usize) -> Result<Vec<ActivityEntry>> {
        let categories = self.categories.list_categories().await?;
        let bookings = self.bookings.list_bookings().await?;

        let category_name = |category_id: &str| {
            categories
                .iter()
                .find(|c| c.id == category_id)
                .map(|c| c.name.clone())
        };

        let mut activities: Vec<ActivityEntry> = bookings
            .iter()
            .map(|booking| ActivityEntry {
                booking_id: booking.id.clone(),
                customer_name: booking.name.clone(),
                no_of_persons: booking.no_of_persons,
                category_name: category_name(&booking.category_id),
                kind: ActivityKind::Booking,
                timestamp: booking.created_at,
            })
            .collect();
        activities.extend(bookings.iter().filter(|b| b.checked_in).map(|booking| {
            ActivityEntry {
                booking_id: booking.id.clone(),
                customer_name: booking.name.clone(),
                no_of_persons: booking.no_of_persons,
                category_name: category_name(&booking.category_id),
                kind: ActivityKind::CheckIn,
                timestamp: booking.updated_at,
            }
        }));

        activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        activities.truncate(limit);
        Ok(activities)
    }

    /// A booking joined with its category for the check-in screen.
    ///
    /// Returns `Ok(None)` for an unknown booking id; a dangling category
    /// reference yields `category: None` and no total.
    pub async fn booking_details(&self, booking_id: &str) -> Result<Option<BookingDetails>> {
        let booking = match self.bookings.get_booking(booking_id).await? {
            Some(booking) => booking,
            None => return Ok(None),
        };

        let category = self.categories.get_category(&booking.category_id).await?;
        let total_amount = category.as_ref().map(|c| booking.total_amount(c));

        Ok(Some(BookingDetails {
            booking,
            category,
            total_amount,
        }))
    }
}
