use thiserror::Error;

use crate::models::{Seat, Tier, TierPrices, VenueLayout};

/// Hard per-booking cap on movie seats.
pub const MAX_SEATS_PER_BOOKING: usize = 6;

/// Build the in-memory seat map for a selection view: venue layout plus
/// the backend's blocked list. Tier is assigned by row band.
pub fn build_seat_map(layout: &VenueLayout, blocked: &[String]) -> Vec<Seat> {
    let mut seats = Vec::with_capacity(layout.total_seats() as usize);
    for row in 1..=layout.rows {
        for number in 1..=layout.seats_per_row {
            let id = Seat::label(row, number);
            seats.push(Seat {
                taken: blocked.iter().any(|b| b == &id),
                tier: tier_for_row(layout, row),
                id,
                row,
                number,
            });
        }
    }
    seats
}

fn tier_for_row(layout: &VenueLayout, row: u32) -> Tier {
    if row <= layout.silver_rows {
        Tier::Silver
    } else if row <= layout.silver_rows + layout.gold_rows {
        Tier::Gold
    } else {
        Tier::Vip
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SeatRejection {
    #[error("seat is already taken")]
    Taken,
    #[error("a booking holds at most 6 seats")]
    LimitReached,
    #[error("seat is already in the cart")]
    AlreadySelected,
}

/// The movie-flow cart: the seats currently picked for one booking.
///
/// Every mutation returns a fresh cart and leaves `self` untouched. The
/// host UI may invoke a state updater twice for a single user action
/// (development-mode double invocation); sharing and mutating nested
/// state would silently double-count a click, so value semantics here
/// are a correctness requirement, not a style choice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeatCart {
    seats: Vec<Seat>,
}

impl SeatCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seat(&self, seat: &Seat) -> Result<SeatCart, SeatRejection> {
        if seat.taken {
            return Err(SeatRejection::Taken);
        }
        if self.contains(&seat.id) {
            return Err(SeatRejection::AlreadySelected);
        }
        if self.seats.len() >= MAX_SEATS_PER_BOOKING {
            return Err(SeatRejection::LimitReached);
        }
        let mut seats = self.seats.clone();
        seats.push(seat.clone());
        Ok(SeatCart { seats })
    }

    pub fn without_seat(&self, seat_id: &str) -> SeatCart {
        SeatCart {
            seats: self
                .seats
                .iter()
                .filter(|s| s.id != seat_id)
                .cloned()
                .collect(),
        }
    }

    /// Select if absent, deselect if present.
    pub fn toggled(&self, seat: &Seat) -> Result<SeatCart, SeatRejection> {
        if self.contains(&seat.id) {
            Ok(self.without_seat(&seat.id))
        } else {
            self.with_seat(seat)
        }
    }

    pub fn contains(&self, seat_id: &str) -> bool {
        self.seats.iter().any(|s| s.id == seat_id)
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn seat_ids(&self) -> Vec<String> {
        self.seats.iter().map(|s| s.id.clone()).collect()
    }

    pub fn total(&self, prices: &TierPrices) -> i64 {
        self.seats.iter().map(|s| prices.for_tier(s.tier)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> VenueLayout {
        VenueLayout {
            rows: 6,
            seats_per_row: 4,
            silver_rows: 2,
            gold_rows: 2,
        }
    }

    fn free_seat(id: &str, tier: Tier) -> Seat {
        Seat {
            id: id.to_string(),
            row: 1,
            number: 1,
            tier,
            taken: false,
        }
    }

    #[test]
    fn seat_map_marks_blocked_seats_and_assigns_tiers() {
        let blocked = vec!["A1".to_string(), "F4".to_string()];
        let map = build_seat_map(&layout(), &blocked);
        assert_eq!(map.len(), 24);

        let a1 = map.iter().find(|s| s.id == "A1").unwrap();
        assert!(a1.taken);
        assert_eq!(a1.tier, Tier::Silver);

        let c2 = map.iter().find(|s| s.id == "C2").unwrap();
        assert_eq!(c2.tier, Tier::Gold);

        let f4 = map.iter().find(|s| s.id == "F4").unwrap();
        assert!(f4.taken);
        assert_eq!(f4.tier, Tier::Vip);
    }

    #[test]
    fn taken_seat_is_rejected_without_changing_the_cart() {
        let cart = SeatCart::new();
        let mut seat = free_seat("B2", Tier::Silver);
        seat.taken = true;
        assert_eq!(cart.with_seat(&seat), Err(SeatRejection::Taken));
        assert!(cart.is_empty());
    }

    #[test]
    fn seventh_seat_is_rejected_with_cart_unchanged() {
        let mut cart = SeatCart::new();
        for n in 0..MAX_SEATS_PER_BOOKING {
            cart = cart
                .with_seat(&free_seat(&format!("A{}", n + 1), Tier::Silver))
                .unwrap();
        }
        let before = cart.clone();
        assert_eq!(
            cart.with_seat(&free_seat("B1", Tier::Gold)),
            Err(SeatRejection::LimitReached)
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn mutations_do_not_touch_the_original_cart() {
        let cart = SeatCart::new();
        let grown = cart.with_seat(&free_seat("A1", Tier::Silver)).unwrap();
        // Applying the same updater twice from the same previous state
        // must not double-count.
        let again = cart.with_seat(&free_seat("A1", Tier::Silver)).unwrap();
        assert!(cart.is_empty());
        assert_eq!(grown, again);
        assert_eq!(grown.len(), 1);
    }

    #[test]
    fn total_prices_by_tier() {
        let prices = TierPrices {
            silver: 150,
            gold: 250,
            vip: 400,
        };
        let cart = SeatCart::new()
            .with_seat(&free_seat("A1", Tier::Silver))
            .unwrap()
            .with_seat(&free_seat("E1", Tier::Vip))
            .unwrap();
        assert_eq!(cart.total(&prices), 550);
    }

    #[test]
    fn toggled_removes_a_selected_seat() {
        let seat = free_seat("A1", Tier::Silver);
        let cart = SeatCart::new().with_seat(&seat).unwrap();
        let cart = cart.toggled(&seat).unwrap();
        assert!(cart.is_empty());
    }
}
