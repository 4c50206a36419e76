use serde::Serialize;
use tracing::info;

use crate::api::{read_json, read_json_or_not_found};
use crate::error::Result;
use crate::models::{Venue, VenueLayout};

/// CRUD client for the venues an owner manages.
#[derive(Clone)]
pub struct VenuesClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VenueDraft {
    pub name: String,
    pub address: String,
    pub layout: VenueLayout,
}

impl VenuesClient {
    pub fn new(base_url: String, http: reqwest::Client) -> Self {
        Self { http, base_url }
    }

    pub async fn list(&self, token: &str) -> Result<Vec<Venue>> {
        let response = self
            .http
            .get(format!("{}/owner/venues", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn create(&self, token: &str, draft: &VenueDraft) -> Result<Venue> {
        let response = self
            .http
            .post(format!("{}/owner/venues", self.base_url))
            .bearer_auth(token)
            .json(draft)
            .send()
            .await?;
        let venue: Venue = read_json(response).await?;
        info!("venue {} created ({})", venue.id, venue.name);
        Ok(venue)
    }

    pub async fn update(&self, token: &str, id: i64, draft: &VenueDraft) -> Result<Venue> {
        let response = self
            .http
            .put(format!("{}/owner/venues/{}", self.base_url, id))
            .bearer_auth(token)
            .json(draft)
            .send()
            .await?;
        read_json_or_not_found(response, "venue").await
    }

    pub async fn delete(&self, token: &str, id: i64) -> Result<()> {
        let response = self
            .http
            .delete(format!("{}/owner/venues/{}", self.base_url, id))
            .bearer_auth(token)
            .send()
            .await?;
        let _: serde_json::Value = read_json_or_not_found(response, "venue").await?;
        info!("venue {} deleted", id);
        Ok(())
    }
}
