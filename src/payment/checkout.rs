use chrono::NaiveDate;
use sha2::{Digest, Sha256};
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;
use uuid::Uuid;

use crate::api::bookings::{BookingsClient, CreateBookingRequest};
use crate::booking::wizard::{BookingRef, EventWizard, MovieWizard, Step};
use crate::error::{Result, StorefrontError};
use crate::models::{BookingKind, PassSelection};

use super::coupons::PaymentDraft;
use super::methods::PaymentMethod;

/// Everything the booking-creation POST needs from the flow.
#[derive(Debug, Clone)]
pub struct CheckoutOrder {
    pub kind: BookingKind,
    pub show_id: Option<i64>,
    pub event_id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub seats: Vec<String>,
    pub passes: Vec<PassSelection>,
    pub amount: i64,
}

/// Simulated checkout.
///
/// There is no gateway behind this: validation and the processing delay
/// happen locally, then a single booking-creation POST settles the flow.
/// A non-2xx answer leaves the wizard on the payment step; success
/// captures the booking reference and advances it to the ticket.
pub struct Checkout {
    bookings: BookingsClient,
    processing_delay: Duration,
}

/// Opaque reference recorded against the booking, derived the same way a
/// gateway would sign a request: a digest over amount, order id and a
/// one-time nonce.
pub fn payment_reference(amount: i64, order_ref: &str) -> String {
    let nonce = Uuid::new_v4();
    let mut hasher = Sha256::new();
    hasher.update(format!("{}{}{}", amount, order_ref, nonce).as_bytes());
    format!("{:x}", hasher.finalize())
}

impl Checkout {
    pub fn new(bookings: BookingsClient, processing_delay: Duration) -> Self {
        Self {
            bookings,
            processing_delay,
        }
    }

    async fn submit(
        &self,
        token: &str,
        order: CheckoutOrder,
        method: &PaymentMethod,
    ) -> Result<BookingRef> {
        // Incomplete fields block before anything is sent.
        method.validate()?;

        info!(
            "processing simulated {} payment of {}",
            method.label(),
            order.amount
        );
        sleep(self.processing_delay).await;

        let order_ref = format!("order-{}", Uuid::new_v4());
        let payment_ref = payment_reference(order.amount, &order_ref);
        let request = CreateBookingRequest {
            kind: order.kind,
            show_id: order.show_id,
            event_id: order.event_id,
            date: order.date,
            seats: order.seats,
            passes: order.passes,
            amount: order.amount,
            payment_method: method.label().to_string(),
            order_ref,
            payment_ref,
        };

        let created = self.bookings.create(token, &request).await?;
        Ok(BookingRef {
            id: created.id,
            code: created.code,
        })
    }

    /// Settle the movie flow. On success the wizard lands on the ticket
    /// step; on failure it stays put and the error is the caller's notice.
    pub async fn pay_movie(
        &self,
        token: &str,
        wizard: &mut MovieWizard,
        draft: &PaymentDraft,
        method: &PaymentMethod,
    ) -> Result<BookingRef> {
        if wizard.step() != Step::Payment {
            return Err(StorefrontError::Validation(
                "not on the payment step".to_string(),
            ));
        }
        let show = wizard.show().cloned().ok_or_else(|| {
            StorefrontError::Validation("no show selected".to_string())
        })?;

        let order = CheckoutOrder {
            kind: BookingKind::Movie,
            show_id: Some(show.id),
            event_id: None,
            date: Some(show.date),
            seats: wizard.seats().seat_ids(),
            passes: Vec::new(),
            amount: draft.final_amount(),
        };
        let booking = self.submit(token, order, method).await?;
        wizard.complete_payment(booking.clone());
        Ok(booking)
    }

    /// Settle the event flow; same contract as [`pay_movie`].
    ///
    /// [`pay_movie`]: Checkout::pay_movie
    pub async fn pay_event(
        &self,
        token: &str,
        wizard: &mut EventWizard,
        draft: &PaymentDraft,
        method: &PaymentMethod,
    ) -> Result<BookingRef> {
        if wizard.step() != Step::Payment {
            return Err(StorefrontError::Validation(
                "not on the payment step".to_string(),
            ));
        }
        let date = wizard.date().cloned().ok_or_else(|| {
            StorefrontError::Validation("no date selected".to_string())
        })?;

        let order = CheckoutOrder {
            kind: BookingKind::Event,
            show_id: None,
            event_id: Some(wizard.event().id),
            date: Some(date.date),
            seats: Vec::new(),
            passes: wizard.passes().passes(),
            amount: draft.final_amount(),
        };
        let booking = self.submit(token, order, method).await?;
        wizard.complete_payment(booking.clone());
        Ok(booking)
    }
}
