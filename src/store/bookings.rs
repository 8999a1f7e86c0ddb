use chrono::Utc;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::models::Booking;

/// Append-only log of booking requests
pub struct BookingStore {
    bookings: Vec<Booking>,
    next_id: u64,
}

impl BookingStore {
    pub fn new() -> Self {
        Self {
            bookings: Vec::new(),
            next_id: 1,
        }
    }

    /// Record a booking as pending and return it
    pub fn create(&mut self, details: Map<String, Value>) -> Booking {
        let id = self.next_id.to_string();
        self.next_id += 1;

        let booking = Booking::pending(id, details, Utc::now());

        match serde_json::to_string_pretty(&booking) {
            Ok(json) => info!("New booking received: {}", json),
            Err(e) => warn!("New booking {} received (could not render: {})", booking.id, e),
        }

        self.bookings.push(booking.clone());
        debug!("{} bookings recorded", self.bookings.len());
        booking
    }

    pub fn list(&self) -> &[Booking] {
        &self.bookings
    }
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}
