use tracing::debug;

use crate::models::{Event, EventDate, Show};

use super::seats::SeatCart;
use super::zones::ZoneCart;

/// The four stations of the booking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    /// Pick a show (movie flow) or a date (event flow).
    Selection,
    /// Pick seats or zone passes.
    Seating,
    Payment,
    Ticket,
}

/// Backend identifiers captured from a successful booking creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRef {
    pub id: i64,
    pub code: String,
}

/// Step gate for the movie flow.
///
/// Forward progress is earned: Seating needs a chosen show, Payment needs
/// at least one seat, Ticket is reachable only through a successful
/// payment. Regressing clears everything later steps accumulated, and
/// once the ticket is issued the flow is terminal; no backward
/// navigation. (The event flow deliberately does not share that terminal
/// lock; see `EventWizard`.)
#[derive(Debug, Default)]
pub struct MovieWizard {
    step: Step,
    show: Option<Show>,
    seats: SeatCart,
    booking: Option<BookingRef>,
}

impl Default for Step {
    fn default() -> Self {
        Step::Selection
    }
}

impl MovieWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn show(&self) -> Option<&Show> {
        self.show.as_ref()
    }

    pub fn seats(&self) -> &SeatCart {
        &self.seats
    }

    pub fn booking(&self) -> Option<&BookingRef> {
        self.booking.as_ref()
    }

    /// Current payable total; zero until a show and seats are chosen.
    pub fn total(&self) -> i64 {
        self.show
            .as_ref()
            .map(|s| self.seats.total(&s.prices))
            .unwrap_or(0)
    }

    pub fn select_show(&mut self, show: Show) {
        // A different show invalidates whatever was picked for the old one.
        self.clear_after(Step::Selection);
        self.show = Some(show);
    }

    pub fn set_seats(&mut self, cart: SeatCart) {
        self.seats = cart;
    }

    pub fn can_advance_to(&self, target: Step) -> bool {
        if target == self.step {
            return false;
        }
        // Ticket is terminal for the movie flow.
        if self.step == Step::Ticket {
            return false;
        }
        if target < self.step {
            return true;
        }
        match target {
            Step::Selection => true,
            Step::Seating => self.show.is_some(),
            Step::Payment => !self.seats.is_empty(),
            // Only a successful payment moves the flow here.
            Step::Ticket => false,
        }
    }

    /// Move to `target` if the gate allows it. Regression is destructive:
    /// all later-step state is cleared and cannot be recovered.
    pub fn goto(&mut self, target: Step) -> bool {
        if !self.can_advance_to(target) {
            return false;
        }
        if target < self.step {
            self.clear_after(target);
        }
        debug!("movie wizard: {:?} -> {:?}", self.step, target);
        self.step = target;
        true
    }

    /// Capture the created booking and land on the ticket step. Only
    /// valid while on the payment step.
    pub fn complete_payment(&mut self, booking: BookingRef) -> bool {
        if self.step != Step::Payment {
            return false;
        }
        self.booking = Some(booking);
        self.step = Step::Ticket;
        true
    }

    fn clear_after(&mut self, step: Step) {
        if step < Step::Payment {
            self.seats = SeatCart::new();
            self.booking = None;
        }
        if step < Step::Seating {
            self.show = None;
        }
    }
}

/// Step gate for the event flow: same stations, date selection instead of
/// a show, zone passes instead of seats. Unlike the movie flow, the
/// ticket step does not lock backward navigation; whether that asymmetry
/// is intended product behavior is an open product question, so it is
/// preserved rather than unified.
#[derive(Debug)]
pub struct EventWizard {
    step: Step,
    event: Event,
    date: Option<EventDate>,
    passes: ZoneCart,
    booking: Option<BookingRef>,
}

impl EventWizard {
    pub fn new(event: Event) -> Self {
        Self {
            step: Step::Selection,
            event,
            date: None,
            passes: ZoneCart::new(),
            booking: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    pub fn date(&self) -> Option<&EventDate> {
        self.date.as_ref()
    }

    pub fn passes(&self) -> &ZoneCart {
        &self.passes
    }

    pub fn booking(&self) -> Option<&BookingRef> {
        self.booking.as_ref()
    }

    pub fn total(&self) -> i64 {
        self.passes.total_amount(&self.event.zones)
    }

    pub fn select_date(&mut self, date: EventDate) {
        self.clear_after(Step::Selection);
        self.date = Some(date);
    }

    pub fn set_passes(&mut self, cart: ZoneCart) {
        self.passes = cart;
    }

    pub fn can_advance_to(&self, target: Step) -> bool {
        if target == self.step {
            return false;
        }
        if target < self.step {
            // No terminal lock here, unlike the movie flow.
            return true;
        }
        match target {
            Step::Selection => true,
            Step::Seating => self.date.is_some(),
            Step::Payment => self.passes.total_quantity() > 0,
            Step::Ticket => false,
        }
    }

    pub fn goto(&mut self, target: Step) -> bool {
        if !self.can_advance_to(target) {
            return false;
        }
        if target < self.step {
            self.clear_after(target);
        }
        debug!("event wizard: {:?} -> {:?}", self.step, target);
        self.step = target;
        true
    }

    pub fn complete_payment(&mut self, booking: BookingRef) -> bool {
        if self.step != Step::Payment {
            return false;
        }
        self.booking = Some(booking);
        self.step = Step::Ticket;
        true
    }

    fn clear_after(&mut self, step: Step) {
        if step < Step::Payment {
            self.passes = ZoneCart::new();
            self.booking = None;
        }
        if step < Step::Seating {
            self.date = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::zones::ZoneAvailability;
    use crate::models::{Seat, Tier, TicketCategory, TierPrices, Zone};
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn show() -> Show {
        Show {
            id: 11,
            theatre: "Screen 2".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            time: "18:45".to_string(),
            prices: TierPrices {
                silver: 150,
                gold: 250,
                vip: 400,
            },
        }
    }

    fn seat(id: &str) -> Seat {
        Seat {
            id: id.to_string(),
            row: 1,
            number: 1,
            tier: Tier::Gold,
            taken: false,
        }
    }

    fn event() -> Event {
        Event {
            id: 3,
            title: "Jazz Evening".to_string(),
            venue: "Amphitheatre".to_string(),
            address: "Hill Rd".to_string(),
            dates: vec![EventDate {
                date: NaiveDate::from_ymd_opt(2026, 10, 2).unwrap(),
                time: "20:00".to_string(),
            }],
            zones: vec![Zone {
                name: "Front".to_string(),
                capacity: 10,
                categories: vec![TicketCategory {
                    name: "Adult".to_string(),
                    price: 600,
                }],
            }],
        }
    }

    #[test]
    fn seating_is_gated_on_a_chosen_show() {
        let mut wizard = MovieWizard::new();
        assert!(!wizard.can_advance_to(Step::Seating));
        wizard.select_show(show());
        assert!(wizard.can_advance_to(Step::Seating));
        assert!(wizard.goto(Step::Seating));
    }

    #[test]
    fn payment_is_unreachable_with_zero_seats_and_opens_after_one() {
        let mut wizard = MovieWizard::new();
        wizard.select_show(show());
        wizard.goto(Step::Seating);
        assert!(!wizard.can_advance_to(Step::Payment));

        wizard.set_seats(SeatCart::new().with_seat(&seat("C4")).unwrap());
        assert!(wizard.can_advance_to(Step::Payment));
    }

    #[test]
    fn ticket_is_never_reachable_by_navigation() {
        let mut wizard = MovieWizard::new();
        wizard.select_show(show());
        wizard.goto(Step::Seating);
        wizard.set_seats(SeatCart::new().with_seat(&seat("C4")).unwrap());
        wizard.goto(Step::Payment);
        assert!(!wizard.can_advance_to(Step::Ticket));
        assert!(!wizard.goto(Step::Ticket));
    }

    #[test]
    fn same_step_navigation_is_a_no_op() {
        let wizard = MovieWizard::new();
        assert!(!wizard.can_advance_to(Step::Selection));
    }

    #[test]
    fn regressing_to_seating_clears_seats_price_and_booking() {
        let mut wizard = MovieWizard::new();
        wizard.select_show(show());
        wizard.goto(Step::Seating);
        wizard.set_seats(SeatCart::new().with_seat(&seat("C4")).unwrap());
        wizard.goto(Step::Payment);
        assert_eq!(wizard.total(), 250);

        assert!(wizard.goto(Step::Seating));
        assert!(wizard.seats().is_empty());
        assert_eq!(wizard.total(), 0);
        assert!(wizard.booking().is_none());
        // The show survives a regression to step 2.
        assert!(wizard.show().is_some());
    }

    #[test]
    fn regressing_to_selection_additionally_clears_the_show() {
        let mut wizard = MovieWizard::new();
        wizard.select_show(show());
        wizard.goto(Step::Seating);
        wizard.set_seats(SeatCart::new().with_seat(&seat("C4")).unwrap());

        assert!(wizard.goto(Step::Selection));
        assert!(wizard.show().is_none());
        assert!(wizard.seats().is_empty());
    }

    #[test]
    fn movie_ticket_step_is_terminal() {
        let mut wizard = MovieWizard::new();
        wizard.select_show(show());
        wizard.goto(Step::Seating);
        wizard.set_seats(SeatCart::new().with_seat(&seat("C4")).unwrap());
        wizard.goto(Step::Payment);
        assert!(wizard.complete_payment(BookingRef {
            id: 81,
            code: "TKT-81".to_string(),
        }));
        assert_eq!(wizard.step(), Step::Ticket);

        for target in [Step::Selection, Step::Seating, Step::Payment] {
            assert!(!wizard.can_advance_to(target));
            assert!(!wizard.goto(target));
        }
    }

    #[test]
    fn event_ticket_step_allows_backward_navigation() {
        let mut wizard = EventWizard::new(event());
        let date = wizard.event().dates[0].clone();
        wizard.select_date(date);
        wizard.goto(Step::Seating);

        let avail = ZoneAvailability::from_snapshot(HashMap::from([("Front".to_string(), 10)]));
        let cart = ZoneCart::new().with_increment("Front", "Adult", &avail).unwrap();
        wizard.set_passes(cart);
        wizard.goto(Step::Payment);
        assert_eq!(wizard.total(), 600);
        assert!(wizard.complete_payment(BookingRef {
            id: 82,
            code: "TKT-82".to_string(),
        }));

        // Intentional asymmetry with the movie flow.
        assert!(wizard.can_advance_to(Step::Seating));
        assert!(wizard.goto(Step::Seating));
        assert!(wizard.passes().is_empty());
    }

    #[test]
    fn complete_payment_requires_the_payment_step() {
        let mut wizard = MovieWizard::new();
        assert!(!wizard.complete_payment(BookingRef {
            id: 1,
            code: "X".to_string(),
        }));
        assert_eq!(wizard.step(), Step::Selection);
    }

    #[test]
    fn selecting_a_new_show_clears_the_old_cart() {
        let mut wizard = MovieWizard::new();
        wizard.select_show(show());
        wizard.goto(Step::Seating);
        wizard.set_seats(SeatCart::new().with_seat(&seat("C4")).unwrap());

        wizard.goto(Step::Selection);
        wizard.select_show(show());
        assert!(wizard.seats().is_empty());
    }
}
