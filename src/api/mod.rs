//! Outbound HTTP clients for the booking backend and TMDB.
//!
//! Each client is a thin request→transform layer: no retry, no caching
//! across calls, no resilience machinery. Failures are converted into
//! [`StorefrontError`](crate::error::StorefrontError) values at the call
//! site that issued the request; the backend stays authoritative for
//! everything these clients read.

pub mod auth;
pub mod bookings;
pub mod catalog;
pub mod tmdb;
pub mod wishlist;

use std::time::Duration;

use crate::error::{Result, StorefrontError};

/// Shared HTTP client factory. Every outbound call carries this timeout;
/// the original frontend had none, which left spinners hanging forever.
pub(crate) fn http_client(timeout_seconds: u64) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()
        .expect("failed to build HTTP client")
}

/// Decode a success body, or turn a non-2xx response into an `Api` error
/// carrying whatever message the backend sent.
pub(crate) async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json::<T>().await?)
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(StorefrontError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Like [`read_json`], but a 404 becomes a typed `NotFound` so views can
/// render their not-found panels instead of a generic error.
pub(crate) async fn read_json_or_not_found<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
    what: &str,
) -> Result<T> {
    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(StorefrontError::NotFound(what.to_string()));
    }
    read_json(response).await
}
