use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::api::read_json;
use crate::error::Result;
use crate::models::{EventDate, Show, TierPrices};

/// Scheduling client: attach movie screenings and event dates to a venue.
#[derive(Clone)]
pub struct SchedulerClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShowDraft {
    #[serde(rename = "venueId")]
    pub venue_id: i64,
    #[serde(rename = "movieId")]
    pub movie_id: i64,
    pub date: NaiveDate,
    pub time: String,
    pub prices: TierPrices,
}

impl SchedulerClient {
    pub fn new(base_url: String, http: reqwest::Client) -> Self {
        Self { http, base_url }
    }

    pub async fn schedule_show(&self, token: &str, draft: &ShowDraft) -> Result<Show> {
        let response = self
            .http
            .post(format!("{}/owner/shows", self.base_url))
            .bearer_auth(token)
            .json(draft)
            .send()
            .await?;
        let show: Show = read_json(response).await?;
        info!(
            "show {} scheduled at venue {} on {}",
            show.id, draft.venue_id, draft.date
        );
        Ok(show)
    }

    pub async fn list_shows(&self, token: &str, venue_id: i64) -> Result<Vec<Show>> {
        let response = self
            .http
            .get(format!("{}/owner/venues/{}/shows", self.base_url, venue_id))
            .bearer_auth(token)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn add_event_date(
        &self,
        token: &str,
        event_id: i64,
        date: &EventDate,
    ) -> Result<()> {
        let response = self
            .http
            .post(format!("{}/owner/events/{}/dates", self.base_url, event_id))
            .bearer_auth(token)
            .json(date)
            .send()
            .await?;
        let _: serde_json::Value = read_json(response).await?;
        Ok(())
    }
}
