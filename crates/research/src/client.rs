use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{info, warn};

use crate::result::{ResearchOutcome, ResearchResult};
use crate::slug::slugify_room_name;

pub const DEFAULT_BASE_URL: &str = "https://tryhackme.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct RoomApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl RoomApiClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::from_client(base_url, client))
    }

    /// Use a preconfigured HTTP client; its own timeout applies.
    pub fn from_client(base_url: String, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Self::new(DEFAULT_BASE_URL.to_string(), timeout)
    }

    pub fn room_url(&self, room: &str) -> String {
        room_url(&self.base_url, room)
    }

    /// Look up one room. Every failure is reported in the result, never as an error.
    pub async fn research_room(&self, room: &str) -> ResearchResult {
        let url = self.room_url(room);

        let outcome = match self.fetch_body(&url).await {
            Err(e) => ResearchOutcome::Unreachable { reason: e.to_string() },
            Ok(body) => match serde_json::from_slice(&body) {
                Ok(data) => ResearchOutcome::Ok { data },
                Err(e) => ResearchOutcome::InvalidResponse { reason: e.to_string() },
            },
        };

        let result = ResearchResult::new(room, url, outcome);
        match result.reason() {
            None => info!(room, url = %result.source, status = result.status(), "Room researched"),
            Some(reason) => warn!(
                room,
                url = %result.source,
                status = result.status(),
                reason,
                "Room research failed"
            ),
        }
        result
    }

    /// Raw bytes, so invalid UTF-8 surfaces as a parse error instead of being replaced.
    async fn fetch_body(&self, url: &str) -> reqwest::Result<Vec<u8>> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

pub(crate) fn room_url(base_url: &str, room: &str) -> String {
    format!("{}/api/room/{}", base_url, slugify_room_name(room))
}
