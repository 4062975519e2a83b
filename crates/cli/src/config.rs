use ingest::DatasetPaths;
use pipeline::{ExportFormat, DEFAULT_BATCH_SIZE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub datasets: DatasetPaths,
    pub batch: BatchConfig,
    pub research: ResearchConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub batch_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Only research the first N rooms
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub filename: PathBuf,
    pub format: ExportFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            datasets: DatasetPaths::default(),
            batch: BatchConfig {
                batch_size: DEFAULT_BATCH_SIZE,
            },
            research: ResearchConfig {
                base_url: research::DEFAULT_BASE_URL.to_string(),
                timeout_secs: research::DEFAULT_TIMEOUT.as_secs(),
                limit: None,
            },
            export: ExportConfig {
                filename: PathBuf::from("summaries.json"),
                format: ExportFormat::Json,
            },
        }
    }
}

impl ResearchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
