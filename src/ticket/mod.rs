use base64::{engine::general_purpose, Engine as _};
use qrcode::render::svg;
use qrcode::QrCode;

use crate::api::bookings::BookingsClient;
use crate::error::{Result, StorefrontError};
use crate::models::Booking;

/// Renderable ticket: booking details, the shareable URL, and a QR code
/// encoding that URL for door scanning.
#[derive(Debug, Clone)]
pub struct TicketView {
    pub booking: Booking,
    pub public_url: String,
    pub qr_svg: String,
}

impl TicketView {
    pub fn new(booking: Booking, frontend_base: &str) -> Result<Self> {
        let public_url = format!("{}/ticket/{}", frontend_base, booking.code);
        let code = QrCode::new(public_url.as_bytes())
            .map_err(|e| StorefrontError::Ticket(e.to_string()))?;
        let qr_svg = code
            .render::<svg::Color<'_>>()
            .min_dimensions(220, 220)
            .build();
        Ok(TicketView {
            booking,
            public_url,
            qr_svg,
        })
    }

    /// Image-export payload: the QR as an SVG data URI, ready for a
    /// download link.
    pub fn export_data_uri(&self) -> String {
        format!(
            "data:image/svg+xml;base64,{}",
            general_purpose::STANDARD.encode(&self.qr_svg)
        )
    }
}

/// Public ticket lookup, the landing point of a scanned QR. Needs no
/// session; an unknown code is a typed `NotFound` the view renders as a
/// not-found panel.
pub async fn load_public(
    bookings: &BookingsClient,
    code: &str,
    frontend_base: &str,
) -> Result<TicketView> {
    let booking = bookings.by_code(code).await?;
    TicketView::new(booking, frontend_base)
}
