//! Drives the five stages in order: load, reshape, project, store & filter, export.

use tracing::info;

use crate::columns::DROPPED_COLUMNS;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::output::{log_summary, preview, write_csv};
use crate::record::RunSummary;
use crate::{loader, project, reshape, store};

/// Runs the whole pipeline once, printing progress and a preview to stdout.
///
/// The database table and the output CSV are overwritten on every run.
#[tracing::instrument(skip_all, fields(input = %config.input_path.display()))]
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    let raw = loader::load_sheet(&config.input_path, config.header_row)?;

    let reshaped = reshape::reshape(&raw)?;
    println!(
        "Detected {} columns. Assigning names dynamically...",
        reshaped.columns.len()
    );

    let projected = project::project(&reshaped, DROPPED_COLUMNS);

    let records = store::persist_and_filter(&config.database_path, &config.table_name, &projected)?;

    write_csv(&config.output_path, &records)?;
    println!("Cleaned data saved to: {}", config.output_path.display());

    let summary = RunSummary {
        input: config.input_path.clone(),
        detected_columns: reshaped.columns.len(),
        stored_columns: projected.columns.len(),
        stored_rows: projected.rows.len(),
        kept_rows: records.len(),
        output: config.output_path.clone(),
    };
    println!(
        "{} of {} rows kept ({} with missing values dropped)",
        summary.kept_rows,
        summary.stored_rows,
        summary.dropped_rows()
    );

    println!("Cleaned Data Preview:");
    println!("{}", preview(&records, config.preview_rows));

    log_summary(&summary)?;
    info!(kept = summary.kept_rows, "Pipeline finished");
    Ok(summary)
}
