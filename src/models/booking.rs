use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// Keys the server owns on every booking record
const RESERVED_FIELDS: [&str; 3] = ["id", "created_at", "status"];

/// A booking request as recorded by the service
#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    /// Server-assigned identifier
    pub id: String,

    /// When the booking was received
    pub created_at: DateTime<Utc>,

    /// Processing status
    pub status: BookingStatus,

    /// Client-supplied fields (name, email, game, roomType, guests, ...)
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Booking {
    /// Build a pending booking from client fields, dropping any reserved keys
    pub fn pending(id: String, mut details: Map<String, Value>, created_at: DateTime<Utc>) -> Self {
        for key in RESERVED_FIELDS {
            details.remove(key);
        }

        Self {
            id,
            created_at,
            status: BookingStatus::Pending,
            details,
        }
    }
}

/// Booking lifecycle status. Bookings are only ever created as pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
}

/// Acknowledgement returned after a booking is recorded
#[derive(Debug, Clone, Serialize)]
pub struct BookingReceipt {
    pub message: String,
    pub booking_id: String,
}

impl BookingReceipt {
    pub fn for_booking(booking: &Booking) -> Self {
        Self {
            message: "Booking received successfully".to_string(),
            booking_id: booking.id.clone(),
        }
    }
}
