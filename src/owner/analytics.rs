use serde::Serialize;

/// Sales figures shown on the owner dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_seats: i32,
    pub sold_seats: i32,
    pub reserved_seats: i32,
    pub free_seats: i32,
    pub total_revenue: String,
    pub bookings_count: i32,
}

/// Static mock figures. The dashboard in the original product never had a
/// live analytics endpoint; these placeholders stand in until one exists.
pub fn dashboard() -> DashboardStats {
    DashboardStats {
        total_seats: 1200,
        sold_seats: 764,
        reserved_seats: 58,
        free_seats: 378,
        total_revenue: format!("{:.2}", 186_500.0),
        bookings_count: 311,
    }
}
