pub mod reader;
pub mod team;

pub use reader::DatasetReader;
pub use team::{Room, Team, UNKNOWN_ROLE};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ROOMS_FILE: &str = "THM_Rooms_Sheet1.json";
pub const TEAMS_FILE: &str = "teams1_1.json";

/// Locations of the two input datasets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetPaths {
    pub rooms: PathBuf,
    pub teams: PathBuf,
}

impl Default for DatasetPaths {
    fn default() -> Self {
        Self {
            rooms: PathBuf::from(ROOMS_FILE),
            teams: PathBuf::from(TEAMS_FILE),
        }
    }
}

impl DatasetPaths {
    pub fn new(rooms: impl Into<PathBuf>, teams: impl Into<PathBuf>) -> Self {
        Self {
            rooms: rooms.into(),
            teams: teams.into(),
        }
    }
}

/// Load room titles, keeping only string entries in source order.
pub async fn load_rooms(path: &Path) -> Result<Vec<Room>> {
    let items = DatasetReader::read_collection(path, "rooms").await?;
    let total = items.len();

    let rooms: Vec<Room> = items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(title) => Some(title),
            _ => None,
        })
        .collect();

    debug!(
        path = %path.display(),
        loaded = rooms.len(),
        dropped = total - rooms.len(),
        "Loaded rooms"
    );

    Ok(rooms)
}

/// Load teams, keeping only object-shaped entries.
pub async fn load_teams(path: &Path) -> Result<Vec<Team>> {
    let items = DatasetReader::read_collection(path, "teams").await?;
    let total = items.len();

    let teams: Vec<Team> = items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(fields) => Some(Team::new(fields)),
            _ => None,
        })
        .collect();

    debug!(
        path = %path.display(),
        loaded = teams.len(),
        dropped = total - teams.len(),
        "Loaded teams"
    );

    Ok(teams)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_rooms_filters_non_strings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rooms.json");
        std::fs::write(
            &path,
            r#"{"rooms": ["Intro to Pentesting", 42, null, "Intro to Pentesting", {"t": 1}, "Nmap"]}"#,
        )
        .unwrap();

        let rooms = load_rooms(&path).await.unwrap();
        assert_eq!(
            rooms,
            vec!["Intro to Pentesting", "Intro to Pentesting", "Nmap"]
        );
    }

    #[tokio::test]
    async fn test_load_teams_filters_non_objects() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("teams.json");
        std::fs::write(
            &path,
            r#"{"teams": [{"role_en": "Analyst"}, "SOC", [1, 2], {"id": "red"}]}"#,
        )
        .unwrap();

        let teams = load_teams(&path).await.unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].display_name(), "Analyst");
        assert_eq!(teams[1].display_name(), "red");
    }

    #[tokio::test]
    async fn test_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_rooms(&dir.path().join("absent.json")).await.unwrap_err();
        assert!(err.to_string().contains("Failed to read dataset"));
    }

    #[tokio::test]
    async fn test_invalid_json_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("teams.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_teams(&path).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse dataset"));
    }

    #[test]
    fn test_default_paths() {
        let paths = DatasetPaths::default();
        assert_eq!(paths.rooms, PathBuf::from(ROOMS_FILE));
        assert_eq!(paths.teams, PathBuf::from(TEAMS_FILE));
    }
}
