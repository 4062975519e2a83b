use ingest::DatasetPaths;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use summarize::{SummaryRecord, SCALAR_FIELDS};
use tracing::info;

use crate::batch::start_research;
use crate::error::{PipelineError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(PipelineError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Csv => f.write_str("csv"),
        }
    }
}

/* ---------------- Rendering ---------------- */

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write one comma-separated row, quoting cells that need it. Rows end in CRLF.
pub fn write_row<W: Write>(mut w: W, row: &[&str]) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            w.write_all(b",")?;
        }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            w.write_all(cell.as_bytes())?;
        }
    }
    w.write_all(b"\r\n")
}

/// Render records as CSV: fixed header, scalar fields only.
pub fn write_csv<W: Write>(mut w: W, records: &[SummaryRecord]) -> io::Result<()> {
    write_row(&mut w, &SCALAR_FIELDS)?;
    for record in records {
        let row: Vec<&str> = SCALAR_FIELDS
            .iter()
            .map(|field| record.csv_field(field).unwrap_or_default())
            .collect();
        write_row(&mut w, &row)?;
    }
    w.flush()
}

pub fn to_csv_string(records: &[SummaryRecord]) -> io::Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_csv(&mut buf, records)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

pub fn to_json_string(records: &[SummaryRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/* ---------------- Writing ---------------- */

/// Serialize already-collected records to `path` in the given format.
pub async fn write_records(path: &Path, format: ExportFormat, records: &[SummaryRecord]) -> Result<()> {
    let contents = match format {
        ExportFormat::Json => to_json_string(records)?,
        ExportFormat::Csv => to_csv_string(records).map_err(|source| PipelineError::Io {
            path: path.to_path_buf(),
            source,
        })?,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| PipelineError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
    }

    tokio::fs::write(path, contents)
        .await
        .map_err(|source| PipelineError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Summarize every room and export the flat result.
///
/// The format is validated after collection but before anything touches the
/// filesystem, so an unsupported format leaves no file behind.
pub async fn download_results(
    filename: impl AsRef<Path>,
    fmt: &str,
    paths: &DatasetPaths,
    batch_size: usize,
) -> Result<PathBuf> {
    let pipeline = start_research(paths, batch_size).await?;
    let records: Vec<SummaryRecord> = pipeline.flatten().collect();

    let format: ExportFormat = fmt.parse()?;
    let output_path = filename.as_ref().to_path_buf();

    write_records(&output_path, format, &records).await?;

    info!(
        path = %output_path.display(),
        format = %format,
        records = records.len(),
        "Exported summaries"
    );

    Ok(output_path)
}
