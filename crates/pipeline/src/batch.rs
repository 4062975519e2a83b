use ingest::{DatasetPaths, Room, Team};
use summarize::{summarize_room, SummaryRecord};
use tracing::{debug, info};

use crate::error::{PipelineError, Result};

pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Lazily summarizes rooms one contiguous slice at a time.
///
/// Each call to `next` summarizes at most `batch_size` rooms; the last batch
/// may be shorter. Once exhausted it stays exhausted.
pub struct BatchPipeline {
    rooms: Vec<Room>,
    teams: Vec<Team>,
    batch_size: usize,
    cursor: usize,
}

impl BatchPipeline {
    pub fn from_parts(rooms: Vec<Room>, teams: Vec<Team>, batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(PipelineError::InvalidBatchSize);
        }

        Ok(Self {
            rooms,
            teams,
            batch_size,
            cursor: 0,
        })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

impl Iterator for BatchPipeline {
    type Item = Vec<SummaryRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.rooms.len() {
            return None;
        }

        let end = (self.cursor + self.batch_size).min(self.rooms.len());
        let batch: Vec<SummaryRecord> = self.rooms[self.cursor..end]
            .iter()
            .map(|room| summarize_room(room, &self.teams))
            .collect();

        debug!(start = self.cursor, end, "Summarized batch");
        self.cursor = end;

        Some(batch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.rooms.len() - self.cursor).div_ceil(self.batch_size);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BatchPipeline {}

impl std::iter::FusedIterator for BatchPipeline {}

/// Load both datasets once and return the batch iterator over them.
pub async fn start_research(paths: &DatasetPaths, batch_size: usize) -> Result<BatchPipeline> {
    if batch_size == 0 {
        return Err(PipelineError::InvalidBatchSize);
    }

    let rooms = ingest::load_rooms(&paths.rooms).await?;
    let teams = ingest::load_teams(&paths.teams).await?;

    info!(
        rooms = rooms.len(),
        teams = teams.len(),
        batch_size,
        "Starting research batches"
    );

    BatchPipeline::from_parts(rooms, teams, batch_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rooms(n: usize) -> Vec<Room> {
        (0..n).map(|i| format!("Room {}", i)).collect()
    }

    fn analyst() -> Vec<Team> {
        vec![Team::new(json!({"role_en": "Analyst"}).as_object().unwrap().clone())]
    }

    #[test]
    fn test_batches_partition_rooms() {
        for batch_size in [1, 2, 3, 7, 10, 50] {
            let rooms = rooms(10);
            let teams = analyst();
            let expected: Vec<SummaryRecord> =
                rooms.iter().map(|r| summarize_room(r, &teams)).collect();

            let batches: Vec<Vec<SummaryRecord>> =
                BatchPipeline::from_parts(rooms, teams, batch_size).unwrap().collect();

            let total: usize = batches.iter().map(Vec::len).sum();
            assert_eq!(total, 10);

            let (last, full) = batches.split_last().unwrap();
            assert!(full.iter().all(|b| b.len() == batch_size));
            assert!(!last.is_empty() && last.len() <= batch_size);

            let flat: Vec<SummaryRecord> = batches.into_iter().flatten().collect();
            assert_eq!(flat, expected);
        }
    }

    #[test]
    fn test_empty_rooms_yield_nothing() {
        let mut pipeline = BatchPipeline::from_parts(Vec::new(), analyst(), 5).unwrap();
        assert_eq!(pipeline.len(), 0);
        assert!(pipeline.next().is_none());
    }

    #[test]
    fn test_size_hint_and_exhaustion() {
        let mut pipeline = BatchPipeline::from_parts(rooms(5), Vec::new(), 2).unwrap();
        assert_eq!(pipeline.len(), 3);
        pipeline.next();
        assert_eq!(pipeline.len(), 2);
        assert_eq!(pipeline.by_ref().count(), 2);
        assert!(pipeline.next().is_none());
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let result = BatchPipeline::from_parts(rooms(3), Vec::new(), 0);
        assert!(matches!(result, Err(PipelineError::InvalidBatchSize)));
    }

    #[tokio::test]
    async fn test_start_research_loads_datasets() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DatasetPaths::new(dir.path().join("rooms.json"), dir.path().join("teams.json"));
        std::fs::write(&paths.rooms, r#"{"rooms": ["Nmap", 1, "Burp Suite", "Wireshark"]}"#).unwrap();
        std::fs::write(&paths.teams, r#"{"teams": [{"role_en": "Analyst"}, "x"]}"#).unwrap();

        let batches: Vec<_> = start_research(&paths, 2).await.unwrap().collect();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0][0].room_title, "Nmap");
        assert_eq!(batches[1][0].room_title, "Wireshark");
        assert_eq!(batches[1][0].relevance.len(), 1);
    }

    #[tokio::test]
    async fn test_start_research_missing_teams_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DatasetPaths::new(dir.path().join("rooms.json"), dir.path().join("teams.json"));
        std::fs::write(&paths.rooms, r#"{"rooms": ["Nmap"]}"#).unwrap();

        let result = start_research(&paths, 2).await;
        assert!(matches!(result, Err(PipelineError::Load(_))));
    }
}
