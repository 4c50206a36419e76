use crate::error::Result;
use crate::models::WishlistEntry;

use super::read_json;

/// Client for the server-side wishlist. The local optimistic state and
/// its rollback live in [`crate::wishlist`]; this only moves the wire.
#[derive(Clone)]
pub struct WishlistClient {
    http: reqwest::Client,
    base_url: String,
}

impl WishlistClient {
    pub fn new(base_url: String, http: reqwest::Client) -> Self {
        Self { http, base_url }
    }

    pub async fn fetch(&self, token: &str) -> Result<Vec<WishlistEntry>> {
        let response = self
            .http
            .get(format!("{}/wishlist", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;
        read_json(response).await
    }

    /// Add the entry if absent, remove it if present. The backend decides;
    /// the optimistic local flip has already happened by the time this runs.
    pub async fn toggle(&self, token: &str, entry: &WishlistEntry) -> Result<()> {
        let response = self
            .http
            .post(format!("{}/wishlist/toggle", self.base_url))
            .bearer_auth(token)
            .json(entry)
            .send()
            .await?;
        let _: serde_json::Value = read_json(response).await?;
        Ok(())
    }
}
