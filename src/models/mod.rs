pub mod user;
pub mod movie;
pub mod event;
pub mod venue;
pub mod show;
pub mod seat;
pub mod booking;
pub mod wishlist;

pub use user::{Role, User};
pub use movie::{CastMember, CrewMember, Movie};
pub use event::{Event, EventDate, TicketCategory, Zone};
pub use venue::{Venue, VenueLayout};
pub use show::{Show, Tier, TierPrices};
pub use seat::Seat;
pub use booking::{Booking, BookingKind, PassSelection};
pub use wishlist::WishlistEntry;
