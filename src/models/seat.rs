use serde::{Deserialize, Serialize};

use super::show::Tier;

/// In-memory seat for the selection view. Regenerated per view from the
/// venue layout plus the backend's blocked-seat list; never persisted
/// client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    /// Row letter + number, e.g. "C7".
    pub id: String,
    pub row: u32,
    pub number: u32,
    pub tier: Tier,
    pub taken: bool,
}

impl Seat {
    pub fn label(row: u32, number: u32) -> String {
        // Row 1 -> A. Venues here never exceed 26 rows.
        let letter = char::from(b'A' + ((row - 1) % 26) as u8);
        format!("{}{}", letter, number)
    }
}
