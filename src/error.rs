//! Error types shared by every pipeline stage.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Spreadsheet format error: {0}")]
    Format(String),

    #[error("Relational store error: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl PipelineError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        PipelineError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn format(message: impl Into<String>) -> Self {
        PipelineError::Format(message.into())
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
