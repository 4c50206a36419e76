use std::collections::{BTreeMap, HashMap};
use thiserror::Error;
use tracing::warn;

use crate::models::{PassSelection, Zone};

/// Per-zone availability the selection view reconciles the cart against.
///
/// Normally built from a backend snapshot. When that fetch fails the
/// policy is fail open: fall back to the venue's static declared
/// capacities rather than blocking all selection. The backend stays the
/// arbiter at booking submission, so the worst case is a rejected POST,
/// not an oversold event.
#[derive(Debug, Clone, Default)]
pub struct ZoneAvailability {
    counts: HashMap<String, u32>,
}

impl ZoneAvailability {
    pub fn from_snapshot(counts: HashMap<String, u32>) -> Self {
        Self { counts }
    }

    pub fn fail_open(zones: &[Zone]) -> Self {
        warn!("availability snapshot unavailable, falling back to declared capacities");
        Self {
            counts: zones.iter().map(|z| (z.name.clone(), z.capacity)).collect(),
        }
    }

    /// Unknown zones count as sold out.
    pub fn available(&self, zone: &str) -> u32 {
        self.counts.get(zone).copied().unwrap_or(0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ZoneRejection {
    #[error("zone '{zone}' is sold out")]
    SoldOut { zone: String },
    #[error("zone '{zone}' has only {available} passes left")]
    CapacityExceeded { zone: String, available: u32 },
}

/// The event-flow cart: `zone → category → quantity`.
///
/// Like [`SeatCart`](super::SeatCart), all mutations are pure functions
/// of the previous state; in-place mutation of the nested maps under
/// double invocation would double-count a single click.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneCart {
    quantities: BTreeMap<String, BTreeMap<String, u32>>,
}

impl ZoneCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one pass in `zone`/`category`, refusing to exceed what the
    /// zone has available.
    pub fn with_increment(
        &self,
        zone: &str,
        category: &str,
        availability: &ZoneAvailability,
    ) -> Result<ZoneCart, ZoneRejection> {
        let available = availability.available(zone);
        if available == 0 {
            return Err(ZoneRejection::SoldOut {
                zone: zone.to_string(),
            });
        }
        if self.zone_total(zone) + 1 > available {
            return Err(ZoneRejection::CapacityExceeded {
                zone: zone.to_string(),
                available,
            });
        }

        let mut quantities = self.quantities.clone();
        *quantities
            .entry(zone.to_string())
            .or_default()
            .entry(category.to_string())
            .or_insert(0) += 1;
        Ok(ZoneCart { quantities })
    }

    /// Remove one pass, pruning empty entries; a decrement below zero is
    /// a no-op.
    pub fn with_decrement(&self, zone: &str, category: &str) -> ZoneCart {
        let mut quantities = self.quantities.clone();
        if let Some(categories) = quantities.get_mut(zone) {
            if let Some(quantity) = categories.get_mut(category) {
                *quantity = quantity.saturating_sub(1);
                if *quantity == 0 {
                    categories.remove(category);
                }
            }
            if categories.is_empty() {
                quantities.remove(zone);
            }
        }
        ZoneCart { quantities }
    }

    pub fn quantity(&self, zone: &str, category: &str) -> u32 {
        self.quantities
            .get(zone)
            .and_then(|c| c.get(category))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all category quantities already in the cart for a zone.
    pub fn zone_total(&self, zone: &str) -> u32 {
        self.quantities
            .get(zone)
            .map(|c| c.values().sum())
            .unwrap_or(0)
    }

    pub fn total_quantity(&self) -> u32 {
        self.quantities.values().flat_map(|c| c.values()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_quantity() == 0
    }

    /// Price the cart against the event's zone table. Lines whose zone or
    /// category no longer exists price at zero rather than failing.
    pub fn total_amount(&self, zones: &[Zone]) -> i64 {
        self.quantities
            .iter()
            .flat_map(|(zone_name, categories)| {
                categories.iter().map(move |(category, quantity)| {
                    let price = zones
                        .iter()
                        .find(|z| &z.name == zone_name)
                        .and_then(|z| z.categories.iter().find(|c| &c.name == category))
                        .map(|c| c.price)
                        .unwrap_or(0);
                    price * i64::from(*quantity)
                })
            })
            .sum()
    }

    pub fn passes(&self) -> Vec<PassSelection> {
        self.quantities
            .iter()
            .flat_map(|(zone, categories)| {
                categories.iter().map(move |(category, quantity)| PassSelection {
                    zone: zone.clone(),
                    category: category.clone(),
                    quantity: *quantity,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TicketCategory;

    fn zones() -> Vec<Zone> {
        vec![
            Zone {
                name: "Front".to_string(),
                capacity: 3,
                categories: vec![
                    TicketCategory {
                        name: "Adult".to_string(),
                        price: 500,
                    },
                    TicketCategory {
                        name: "Child".to_string(),
                        price: 250,
                    },
                ],
            },
            Zone {
                name: "Lawn".to_string(),
                capacity: 0,
                categories: vec![TicketCategory {
                    name: "Adult".to_string(),
                    price: 200,
                }],
            },
        ]
    }

    fn availability() -> ZoneAvailability {
        ZoneAvailability::from_snapshot(HashMap::from([
            ("Front".to_string(), 3),
            ("Lawn".to_string(), 0),
        ]))
    }

    #[test]
    fn sold_out_zone_rejects_increment_and_leaves_cart_unchanged() {
        let cart = ZoneCart::new();
        let err = cart
            .with_increment("Lawn", "Adult", &availability())
            .unwrap_err();
        assert_eq!(
            err,
            ZoneRejection::SoldOut {
                zone: "Lawn".to_string()
            }
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn increments_across_categories_count_against_one_zone_cap() {
        let avail = availability();
        let cart = ZoneCart::new()
            .with_increment("Front", "Adult", &avail)
            .unwrap()
            .with_increment("Front", "Adult", &avail)
            .unwrap()
            .with_increment("Front", "Child", &avail)
            .unwrap();
        assert_eq!(cart.zone_total("Front"), 3);

        let err = cart.with_increment("Front", "Child", &avail).unwrap_err();
        assert_eq!(
            err,
            ZoneRejection::CapacityExceeded {
                zone: "Front".to_string(),
                available: 3
            }
        );
        assert_eq!(cart.zone_total("Front"), 3);
    }

    #[test]
    fn decrement_prunes_and_saturates_at_zero() {
        let avail = availability();
        let cart = ZoneCart::new()
            .with_increment("Front", "Adult", &avail)
            .unwrap();
        let cart = cart.with_decrement("Front", "Adult");
        assert!(cart.is_empty());
        // Further decrements are no-ops.
        let cart = cart.with_decrement("Front", "Adult");
        assert_eq!(cart.quantity("Front", "Adult"), 0);
    }

    #[test]
    fn unknown_zone_counts_as_sold_out() {
        let cart = ZoneCart::new();
        assert!(matches!(
            cart.with_increment("Balcony", "Adult", &availability()),
            Err(ZoneRejection::SoldOut { .. })
        ));
    }

    #[test]
    fn fail_open_uses_declared_capacities() {
        let avail = ZoneAvailability::fail_open(&zones());
        assert_eq!(avail.available("Front"), 3);
        assert_eq!(avail.available("Lawn"), 0);
    }

    #[test]
    fn total_amount_prices_each_line() {
        let avail = availability();
        let cart = ZoneCart::new()
            .with_increment("Front", "Adult", &avail)
            .unwrap()
            .with_increment("Front", "Child", &avail)
            .unwrap();
        assert_eq!(cart.total_amount(&zones()), 750);

        let passes = cart.passes();
        assert_eq!(passes.len(), 2);
        assert!(passes.iter().any(|p| p.category == "Child" && p.quantity == 1));
    }

    #[test]
    fn increments_never_mutate_the_previous_cart() {
        let avail = availability();
        let cart = ZoneCart::new();
        let once = cart.with_increment("Front", "Adult", &avail).unwrap();
        let twice = cart.with_increment("Front", "Adult", &avail).unwrap();
        assert!(cart.is_empty());
        assert_eq!(once, twice);
        assert_eq!(once.quantity("Front", "Adult"), 1);
    }
}
