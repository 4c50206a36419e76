pub mod seats;
pub mod wizard;
pub mod zones;

pub use seats::{build_seat_map, SeatCart, SeatRejection, MAX_SEATS_PER_BOOKING};
pub use wizard::{BookingRef, EventWizard, MovieWizard, Step};
pub use zones::{ZoneAvailability, ZoneCart, ZoneRejection};

use crate::models::Event;

/// The one booking flow a session may have in progress.
///
/// Movie and event flows are mutually exclusive; starting either replaces
/// whatever the other had accumulated, so stale seats or zone quantities
/// can never leak across flow types.
#[derive(Debug)]
pub enum ActiveFlow {
    Movie(MovieWizard),
    Event(EventWizard),
}

#[derive(Debug, Default)]
pub struct BookingSlot {
    active: Option<ActiveFlow>,
}

impl BookingSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_movie(&mut self) -> &mut MovieWizard {
        self.active = Some(ActiveFlow::Movie(MovieWizard::new()));
        match self.active.as_mut() {
            Some(ActiveFlow::Movie(w)) => w,
            _ => unreachable!("just assigned a movie flow"),
        }
    }

    pub fn begin_event(&mut self, event: Event) -> &mut EventWizard {
        self.active = Some(ActiveFlow::Event(EventWizard::new(event)));
        match self.active.as_mut() {
            Some(ActiveFlow::Event(w)) => w,
            _ => unreachable!("just assigned an event flow"),
        }
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn movie(&mut self) -> Option<&mut MovieWizard> {
        match self.active.as_mut() {
            Some(ActiveFlow::Movie(w)) => Some(w),
            _ => None,
        }
    }

    pub fn event(&mut self) -> Option<&mut EventWizard> {
        match self.active.as_mut() {
            Some(ActiveFlow::Event(w)) => Some(w),
            _ => None,
        }
    }
}
