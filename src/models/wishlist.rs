use serde::{Deserialize, Serialize};

use super::booking::BookingKind;

/// Saved catalog item. Movie and event entries share one list; `kind`
/// disambiguates ids from the two catalogs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub id: i64,
    pub kind: BookingKind,
    pub title: String,
    pub genre: Option<String>,
    pub poster_url: Option<String>,
}

impl WishlistEntry {
    /// Identity for toggle purposes: same catalog item, not same metadata.
    pub fn same_item(&self, other: &WishlistEntry) -> bool {
        self.id == other.id && self.kind == other.kind
    }
}
