//! Error types for schedule feed loading.

use std::path::PathBuf;
use thiserror::Error;

use sched_store::StoreError;

/// Errors that can occur while loading raw entries or seed data.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension is neither `.json` nor `.csv`.
    #[error("unsupported feed format for {path} (expected .json or .csv)")]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to parse a CSV record; `line` is 1-based and counts the header.
    #[error("failed to parse CSV {path} at line {line}: {source}")]
    CsvParse {
        path: PathBuf,
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// Seed data could not be written to the store.
    #[error("failed to install seed data: {0}")]
    Seed(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, SourceError>;
