use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::models::{Booking, BookingKind, PassSelection};

use super::{read_json, read_json_or_not_found};

/// Client for booking creation and retrieval. Creation happens exactly
/// once, at the end of the payment step; everything else is read-only.
#[derive(Clone)]
pub struct BookingsClient {
    http: reqwest::Client,
    base_url: String,
}

/// Booking-creation payload. Carries the final charged amount, the cart
/// snapshot, and the simulated payment identifiers.
#[derive(Debug, Clone, Serialize)]
pub struct CreateBookingRequest {
    pub kind: BookingKind,
    #[serde(rename = "showId", skip_serializing_if = "Option::is_none")]
    pub show_id: Option<i64>,
    #[serde(rename = "eventId", skip_serializing_if = "Option::is_none")]
    pub event_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub seats: Vec<String>,
    pub passes: Vec<PassSelection>,
    pub amount: i64,
    #[serde(rename = "paymentMethod")]
    pub payment_method: String,
    #[serde(rename = "orderRef")]
    pub order_ref: String,
    #[serde(rename = "paymentRef")]
    pub payment_ref: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookingCreated {
    pub id: i64,
    pub code: String,
}

impl BookingsClient {
    pub fn new(base_url: String, http: reqwest::Client) -> Self {
        Self { http, base_url }
    }

    pub async fn create(&self, token: &str, request: &CreateBookingRequest) -> Result<BookingCreated> {
        let response = self
            .http
            .post(format!("{}/bookings", self.base_url))
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;
        let created: BookingCreated = read_json(response).await?;
        info!(
            "booking {} created (code {}, amount {})",
            created.id, created.code, request.amount
        );
        Ok(created)
    }

    pub async fn my_bookings(&self, token: &str) -> Result<Vec<Booking>> {
        let response = self
            .http
            .get(format!("{}/bookings", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;
        read_json(response).await
    }

    /// Public lookup by shareable code, for the QR-scanned ticket view.
    /// Requires no authentication; an unknown code is a typed `NotFound`.
    pub async fn by_code(&self, code: &str) -> Result<Booking> {
        let response = self
            .http
            .get(format!("{}/tickets/{}", self.base_url, code))
            .send()
            .await?;
        read_json_or_not_found(response, "booking").await
    }
}
