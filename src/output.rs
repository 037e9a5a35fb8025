//! Output formatting and persistence for cleaned records.
//!
//! Supports CSV export, a text preview of the first rows, and JSON run summaries.

use std::path::Path;

use csv::WriterBuilder;
use tracing::{debug, info};

use crate::error::{PipelineError, Result};
use crate::record::{CleanedRecord, RunSummary};

/// Writes `records` to `path` with a header row and no index column,
/// replacing any existing file.
pub fn write_csv(path: &Path, records: &[CleanedRecord]) -> Result<()> {
    debug!(path = %path.display(), rows = records.len(), "Writing CSV");

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PipelineError::io(parent, e))?;
    }

    let to_io = |e: csv::Error| PipelineError::io(path, e.into());
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(to_io)?;

    // Written explicitly so an empty result still carries the header.
    writer.write_record(CleanedRecord::HEADERS).map_err(to_io)?;
    for record in records {
        writer.serialize(record).map_err(to_io)?;
    }
    writer.flush().map_err(|e| PipelineError::io(path, e))?;

    Ok(())
}

/// Renders the first `n` records as a right-aligned table with a row number column.
pub fn preview(records: &[CleanedRecord], n: usize) -> String {
    let shown = &records[..n.min(records.len())];

    let mut grid: Vec<Vec<String>> = Vec::with_capacity(shown.len() + 1);
    grid.push(
        std::iter::once(String::new())
            .chain(CleanedRecord::HEADERS.iter().map(|h| h.to_string()))
            .collect(),
    );
    for (i, record) in shown.iter().enumerate() {
        grid.push(
            std::iter::once(i.to_string())
                .chain(record.values().iter().map(|v| format!("{v:?}")))
                .collect(),
        );
    }

    let widths: Vec<usize> = (0..grid[0].len())
        .map(|c| grid.iter().map(|row| row[c].len()).max().unwrap_or(0))
        .collect();

    grid.iter()
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(cell, w)| format!("{cell:>w$}"))
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Logs a run summary as JSON.
pub fn log_summary(summary: &RunSummary) -> Result<()> {
    let json = serde_json::to_string(summary)
        .map_err(|e| PipelineError::format(format!("cannot encode run summary: {e}")))?;
    info!(summary = %json, "Run complete");
    Ok(())
}
