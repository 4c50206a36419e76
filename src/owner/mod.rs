//! Owner-console surface: venue CRUD, show/event scheduling, and the
//! dashboard figures. Everything here requires an owner-role session
//! token; the backend enforces the role, this side just carries it.

pub mod analytics;
pub mod scheduler;
pub mod venues;

pub use analytics::{dashboard, DashboardStats};
pub use scheduler::SchedulerClient;
pub use venues::VenuesClient;
