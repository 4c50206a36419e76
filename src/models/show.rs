use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Movie-seat pricing class, assigned by seat row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Silver,
    Gold,
    Vip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierPrices {
    pub silver: i64,
    pub gold: i64,
    pub vip: i64,
}

impl TierPrices {
    pub fn for_tier(&self, tier: Tier) -> i64 {
        match tier {
            Tier::Silver => self.silver,
            Tier::Gold => self.gold,
            Tier::Vip => self.vip,
        }
    }
}

/// One screening of a movie at a venue. Selected transiently during booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Show {
    pub id: i64,
    pub theatre: String,
    pub date: NaiveDate,
    pub time: String,
    pub prices: TierPrices,
}
