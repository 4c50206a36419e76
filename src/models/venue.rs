use serde::{Deserialize, Serialize};

/// Screening venue owned through the management console.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub layout: VenueLayout,
}

/// Static seat layout a venue declares. Also serves as the fail-open
/// capacity fallback when a live availability snapshot cannot be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueLayout {
    pub rows: u32,
    pub seats_per_row: u32,
    /// Rows 1..=silver_rows are silver tier.
    pub silver_rows: u32,
    /// The next gold_rows rows are gold; anything beyond is vip.
    pub gold_rows: u32,
}

impl VenueLayout {
    pub fn total_seats(&self) -> u32 {
        self.rows * self.seats_per_row
    }
}
