//! Batch summarization of the rooms dataset and export to JSON or CSV.

pub mod batch;
pub mod error;
pub mod export;

pub use batch::{start_research, BatchPipeline, DEFAULT_BATCH_SIZE};
pub use error::{PipelineError, Result};
pub use export::{download_results, write_records, ExportFormat};
