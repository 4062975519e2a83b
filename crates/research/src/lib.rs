pub mod client;
pub mod result;
pub mod slug;

pub use client::{RoomApiClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use result::{ResearchOutcome, ResearchResult};
pub use slug::slugify_room_name;

use anyhow::Result;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Look up a room on the public API with the given timeout.
pub async fn research_room(room: &str, timeout: Duration) -> ResearchResult {
    match RoomApiClient::with_timeout(timeout) {
        Ok(client) => client.research_room(room).await,
        Err(e) => ResearchResult::new(
            room,
            client::room_url(DEFAULT_BASE_URL, room),
            ResearchOutcome::Unreachable { reason: format!("{:#}", e) },
        ),
    }
}

/// Research every room in the dataset (or the first `limit`), one at a time.
///
/// Only loading the rooms file can fail; lookup failures are carried in the results.
pub async fn research_missing_data(
    client: &RoomApiClient,
    rooms_path: &Path,
    limit: Option<usize>,
) -> Result<Vec<ResearchResult>> {
    let mut rooms = ingest::load_rooms(rooms_path).await?;
    if let Some(limit) = limit {
        rooms.truncate(limit);
    }

    info!(rooms = rooms.len(), "Researching rooms");

    let mut results = Vec::with_capacity(rooms.len());
    for room in &rooms {
        results.push(client.research_room(room).await);
    }

    let ok = results.iter().filter(|r| r.is_ok()).count();
    info!(total = results.len(), ok, failed = results.len() - ok, "Research finished");

    Ok(results)
}
