use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input dataset missing or malformed
    #[error("failed to load datasets: {0:#}")]
    Load(#[from] anyhow::Error),

    #[error("batch size must be at least 1")]
    InvalidBatchSize,

    #[error("unsupported format '{0}', use 'json' or 'csv'")]
    UnsupportedFormat(String),

    #[error("failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
