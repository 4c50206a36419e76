use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

use crate::error::Result;
use crate::models::event::EventRecord;
use crate::models::{Event, Show, Venue};

use super::{read_json, read_json_or_not_found};

/// Read-side client for the catalog: events, venues, shows, and the
/// availability snapshots the selection views reconcile against.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct BlockedSeatsResponse {
    #[serde(default)]
    blocked: Vec<String>,
}

impl CatalogClient {
    pub fn new(base_url: String, http: reqwest::Client) -> Self {
        Self { http, base_url }
    }

    pub async fn events(&self) -> Result<Vec<Event>> {
        let response = self
            .http
            .get(format!("{}/events", self.base_url))
            .send()
            .await?;
        let records: Vec<EventRecord> = read_json(response).await?;
        debug!("catalog: {} events", records.len());
        Ok(records.into_iter().map(Event::from_record).collect())
    }

    pub async fn event(&self, id: i64) -> Result<Event> {
        let response = self
            .http
            .get(format!("{}/events/{}", self.base_url, id))
            .send()
            .await?;
        let record: EventRecord = read_json_or_not_found(response, "event").await?;
        Ok(Event::from_record(record))
    }

    pub async fn venues(&self) -> Result<Vec<Venue>> {
        let response = self
            .http
            .get(format!("{}/venues", self.base_url))
            .send()
            .await?;
        read_json(response).await
    }

    /// Screenings of a movie on a given date, across venues.
    pub async fn shows(&self, movie_id: i64, date: NaiveDate) -> Result<Vec<Show>> {
        let response = self
            .http
            .get(format!("{}/shows", self.base_url))
            .query(&[
                ("movieId", movie_id.to_string()),
                ("date", date.to_string()),
            ])
            .send()
            .await?;
        read_json(response).await
    }

    /// Seat ids the backend currently reports as blocked for a show.
    pub async fn blocked_seats(&self, show_id: i64) -> Result<Vec<String>> {
        let response = self
            .http
            .get(format!("{}/shows/{}/blocked-seats", self.base_url, show_id))
            .send()
            .await?;
        let body: BlockedSeatsResponse = read_json(response).await?;
        Ok(body.blocked)
    }

    /// `{zone name: available count}` snapshot for an event date.
    pub async fn zone_availability(
        &self,
        event_id: i64,
        date: NaiveDate,
    ) -> Result<HashMap<String, u32>> {
        let response = self
            .http
            .get(format!("{}/events/{}/availability", self.base_url, event_id))
            .query(&[("date", date.to_string())])
            .send()
            .await?;
        read_json(response).await
    }
}
