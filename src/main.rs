//! CLI entry point for the flight delay cleanup pipeline.
//!
//! Reads the delay-cause workbook, stages it in SQLite, and writes the
//! cleaned CSV. Every path has a fixed default, so a bare run needs no flags.

use anyhow::{Context, Result};
use clap::Parser;
use flight_delay_etl::config::{DEFAULT_DATABASE, DEFAULT_INPUT, DEFAULT_OUTPUT, PipelineConfig};
use flight_delay_etl::pipeline;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "flight_delay_etl")]
#[command(about = "Clean the flight delay cause spreadsheet into a CSV", long_about = None)]
struct Cli {
    /// Spreadsheet to read
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// SQLite file used to stage the reshaped table
    #[arg(short, long, default_value = DEFAULT_DATABASE)]
    database: PathBuf,

    /// CSV file to write the cleaned rows to
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/flight_delay_etl.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("flight_delay_etl.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let config = PipelineConfig::with_paths(cli.input, cli.database, cli.output);

    pipeline::run(&config)
        .with_context(|| format!("cleanup of {} failed", config.input_path.display()))?;

    Ok(())
}
