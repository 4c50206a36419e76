use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingKind {
    Movie,
    Event,
}

/// One zone/category line of an event booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassSelection {
    pub zone: String,
    pub category: String,
    pub quantity: u32,
}

/// Confirmed booking as the backend returns it. Created server-side on
/// payment submission; fetched read-only afterwards for "My Bookings"
/// and the ticket views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    /// Human-shareable identifier used in the public ticket URL.
    pub code: String,
    pub kind: BookingKind,
    pub title: String,
    pub venue: String,
    pub date: String,
    pub time: String,
    /// Final charged amount in whole rupees.
    pub amount: i64,
    pub status: String,
    #[serde(default)]
    pub seats: Vec<String>,
    #[serde(default)]
    pub passes: Vec<PassSelection>,
}
