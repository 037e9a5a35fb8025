use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "F1-15 Percent of Flight Delay by Delay Cause 2010-2022.xlsx";
pub const DEFAULT_DATABASE: &str = "flight_delays.db";
pub const DEFAULT_OUTPUT: &str = "cleaned_flight_delay_data.csv";
pub const DEFAULT_TABLE: &str = "raw_data";

/// Paths and fixed settings for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    /// Zero-indexed sheet row holding the column headers.
    pub header_row: usize,
    pub database_path: PathBuf,
    pub table_name: String,
    pub output_path: PathBuf,
    pub preview_rows: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            header_row: 1,
            database_path: PathBuf::from(DEFAULT_DATABASE),
            table_name: DEFAULT_TABLE.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            preview_rows: 5,
        }
    }
}

impl PipelineConfig {
    pub fn with_paths(
        input_path: impl Into<PathBuf>,
        database_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            database_path: database_path.into(),
            output_path: output_path.into(),
            ..Default::default()
        }
    }
}
